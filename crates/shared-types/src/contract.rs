//! # Contract Trait & Dispatch
//!
//! Every contract exposes `invoke(function, args) -> Response`. Dispatch maps
//! the function name onto a closed enumeration of supported operations, each
//! with a declared [`Arity`] that is checked once, before any state access.
//!
//! ## Example Implementation
//!
//! ```rust,ignore
//! #[async_trait]
//! impl Contract for MyContract {
//!     fn contract_id(&self) -> &'static str { "mine" }
//!
//!     async fn invoke(&self, ctx: &TxContext<'_>, function: &str, args: &[String]) -> Response {
//!         let result = match MyFunction::resolve(function, args) {
//!             Ok(f) => self.execute(ctx, f, args).await,
//!             Err(e) => Err(e),
//!         };
//!         into_response(self.contract_id(), function, result)
//!     }
//! }
//! ```

use crate::context::TxContext;
use crate::errors::ContractError;
use crate::response::Response;
use async_trait::async_trait;
use std::fmt;
use tracing::{info, warn};

// =============================================================================
// ARITY
// =============================================================================

/// Number of string arguments an operation accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Exactly `n` arguments.
    Exact(usize),
    /// `n` or more arguments.
    AtLeast(usize),
    /// Arguments are ignored.
    Any,
}

impl Arity {
    /// Check `args` against the declared arity.
    pub fn check(self, args: &[String]) -> Result<(), ContractError> {
        match self {
            Arity::Exact(n) if args.len() != n => Err(ContractError::Argument(format!(
                "Incorrect number of arguments. Expecting {n}"
            ))),
            Arity::AtLeast(n) if args.len() < n => Err(ContractError::Argument(format!(
                "Incorrect number of arguments. Expecting at least {n}"
            ))),
            _ => Ok(()),
        }
    }
}

// =============================================================================
// FUNCTION ENUMERATION
// =============================================================================

/// Closed set of operations a contract supports.
pub trait ContractFunction: Sized + Copy + fmt::Debug + 'static {
    /// Every operation, used for introspection and tests.
    const ALL: &'static [Self];

    /// Map a wire function name onto an operation.
    fn from_name(name: &str) -> Option<Self>;

    /// Canonical wire name.
    fn name(self) -> &'static str;

    /// Declared arity.
    fn arity(self) -> Arity;

    /// Resolve `name` and check `args` against its arity.
    fn resolve(name: &str, args: &[String]) -> Result<Self, ContractError> {
        let function =
            Self::from_name(name).ok_or_else(|| ContractError::UnknownFunction(name.to_string()))?;
        function.arity().check(args)?;
        Ok(function)
    }
}

// =============================================================================
// CONTRACT
// =============================================================================

/// A record-management contract executed by the host.
#[async_trait]
pub trait Contract: Send + Sync {
    /// Deployed contract id, used as the state namespace and invocation target.
    fn contract_id(&self) -> &'static str;

    /// Called once when the contract is instantiated.
    async fn init(&self, _ctx: &TxContext<'_>) -> Response {
        info!(contract = self.contract_id(), "Contract instantiated");
        Response::success(Vec::new())
    }

    /// Execute one function inside the caller's transaction.
    async fn invoke(&self, ctx: &TxContext<'_>, function: &str, args: &[String]) -> Response;
}

/// Convert a handler result into a response, logging failures.
pub fn into_response(
    contract: &str,
    function: &str,
    result: Result<Vec<u8>, ContractError>,
) -> Response {
    if let Err(err) = &result {
        warn!(
            contract,
            function,
            kind = err.kind(),
            error = %err,
            "Invocation rejected"
        );
    }
    result.into()
}

// =============================================================================
// TESTS
// =============================================================================
