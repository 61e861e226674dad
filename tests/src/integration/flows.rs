//! # Authority → Laboratory Flows
//!
//! The Laboratory contract delegates authorization requests to the Authority
//! Registry inside the caller's transaction. These flows check that both
//! records move together, or not at all.

#[cfg(test)]
mod tests {
    use crate::harness::{network, payload, record, reject, submit};
    use anyhow::Result;

    // =========================================================================
    // FIXTURES
    // =========================================================================

    /// Authority `OWNER1` listing `BAYER`, and the `BAYER` laboratory record.
    async fn registered_laboratory(ledger: &ledger_host::MockLedger) -> Result<()> {
        submit(ledger, "arm", "addARM", &["OWNER1", "Agencia del Medicamento"]).await?;
        submit(ledger, "arm", "addLaboratory", &["OWNER1", "BAYER"]).await?;
        submit(
            ledger,
            "lab",
            "addLaboratory",
            &["BAYER", "01/03/2018", "calle de BAYER", "owner1"],
        )
        .await?;
        Ok(())
    }

    // =========================================================================
    // DELEGATION
    // =========================================================================

    #[tokio::test]
    async fn test_authorization_granted_through_laboratory() -> Result<()> {
        let ledger = network()?;
        registered_laboratory(&ledger).await?;

        let res = submit(
            &ledger,
            "lab",
            "createMarketingAuthorization",
            &["OWNER1", "BAYER", "IBUPROFENO", "01/07/2018"],
        )
        .await?;

        let authority = payload(&res)?;
        assert_eq!(authority, record(&ledger, "arm", "OWNER1")?);
        let granted = &authority["laboratories"][0]["authorizations"][0];
        assert_eq!(granted["medicine"], "IBUPROFENO");
        assert_eq!(granted["createdDate"], "01/07/2018");

        // The laboratory record is not touched by delegation.
        let lab = record(&ledger, "lab", "BAYER")?;
        assert_eq!(lab["authorizations"], serde_json::json!([]));
        Ok(())
    }

    #[tokio::test]
    async fn test_rejected_delegation_changes_nothing() -> Result<()> {
        let ledger = network()?;
        registered_laboratory(&ledger).await?;
        let arm_before = ledger.state("arm", "OWNER1");
        let lab_before = ledger.state("lab", "BAYER");

        let message = reject(
            &ledger,
            "lab",
            "createMarketingAuthorization",
            &["OWNER1", "GLX", "IBUPROFENO", "01/07/2018"],
        )
        .await?;
        assert_eq!(
            message,
            "Failed to invoke arm. Got error: Failed to get specified Laboratory"
        );
        assert_eq!(ledger.state("arm", "OWNER1"), arm_before);
        assert_eq!(ledger.state("lab", "BAYER"), lab_before);
        Ok(())
    }

    #[tokio::test]
    async fn test_registry_write_failure_aborts_delegation() -> Result<()> {
        let ledger = network()?;
        registered_laboratory(&ledger).await?;
        let arm_before = ledger.state("arm", "OWNER1");
        ledger.inject_faults(|f| {
            f.write_failures.insert("OWNER1".to_string());
        });

        let message = reject(
            &ledger,
            "lab",
            "createMarketingAuthorization",
            &["OWNER1", "BAYER", "IBUPROFENO", "01/07/2018"],
        )
        .await?;
        assert!(message.starts_with("Failed to invoke arm."), "{message}");
        assert_eq!(ledger.state("arm", "OWNER1"), arm_before);
        Ok(())
    }

    // =========================================================================
    // ORDERS
    // =========================================================================

    #[tokio::test]
    async fn test_order_lifecycle() -> Result<()> {
        let ledger = network()?;
        registered_laboratory(&ledger).await?;

        for qty in ["7", "7", "3"] {
            submit(
                &ledger,
                "lab",
                "addMedicineOrder",
                &["BAYER", "FarmaciaAluche", "IBUPROFENO", "IBUPROFENODESC", qty],
            )
            .await?;
        }
        submit(
            &ledger,
            "lab",
            "SendOrder",
            &["BAYER", "FarmaciaAluche", "IBUPROFENO", "IBUPROFENODESC", "7", "01/07/2018"],
        )
        .await?;
        submit(
            &ledger,
            "lab",
            "sendOrder",
            &["BAYER", "FarmaciaAluche", "IBUPROFENO", "IBUPROFENODESC", "3", "01/07/2018"],
        )
        .await?;

        let lab = record(&ledger, "lab", "BAYER")?;
        let orders = lab["pharmacy"][0]["order"].as_array().cloned().unwrap_or_default();
        let flags: Vec<_> = orders.iter().map(|o| o["sentflag"].clone()).collect();
        assert_eq!(flags, vec!["true", "", "true"]);
        assert_eq!(orders[0]["datesent"], "01/07/2018");
        assert_eq!(orders[1]["datesent"], "");
        assert_eq!(lab["address"], "calle de BAYER");

        let message = reject(
            &ledger,
            "lab",
            "SendOrder",
            &["BAYER", "FarmaciaSol", "IBUPROFENO", "IBUPROFENODESC", "7", ""],
        )
        .await?;
        assert_eq!(message, "Failed to get specified Pharmacy");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_orders_for_one_laboratory_all_land() -> Result<()> {
        let ledger = network()?;
        registered_laboratory(&ledger).await?;

        let mut handles = Vec::new();
        for i in 0..64 {
            let ledger = ledger.clone();
            handles.push(tokio::spawn(async move {
                let medicine = format!("M{i}");
                ledger
                    .invoke(
                        "lab",
                        "addMedicineOrder",
                        &["BAYER", "FarmaciaAluche", &medicine, "desc", "1"],
                    )
                    .await
            }));
        }
        for handle in handles {
            assert!(handle.await?.is_ok());
        }

        let lab = record(&ledger, "lab", "BAYER")?;
        assert_eq!(lab["pharmacy"][0]["order"].as_array().map(Vec::len), Some(64));
        Ok(())
    }

    // =========================================================================
    // QUERIES
    // =========================================================================

    #[tokio::test]
    async fn test_laboratories_listed_by_owner() -> Result<()> {
        let ledger = network()?;
        registered_laboratory(&ledger).await?;
        submit(&ledger, "lab", "addLaboratory", &["GLX", "02/03/2018", "c/ GLX", "owner1"]).await?;
        submit(&ledger, "lab", "addLaboratory", &["ROCHE", "03/03/2018", "c/ ROCHE", "owner2"])
            .await?;

        let res = submit(&ledger, "lab", "queryLabByARM", &["OWNER1"]).await?;
        let keys: Vec<_> = payload(&res)?
            .as_array()
            .cloned()
            .unwrap_or_default()
            .iter()
            .map(|e| e["Key"].as_str().unwrap_or_default().to_string())
            .collect();
        assert_eq!(keys, vec!["BAYER", "GLX"]);
        assert_eq!(ledger.open_cursors(), 0);

        let res = submit(&ledger, "lab", "queryLabsJSON", &["ROCHE"]).await?;
        assert_eq!(payload(&res)?["armOwner"], "owner2");
        Ok(())
    }

    #[tokio::test]
    async fn test_authority_listing_scenario() -> Result<()> {
        let ledger = network()?;
        submit(&ledger, "arm", "addARM", &["ARM1", "My ARM"]).await?;
        submit(&ledger, "arm", "addLaboratory", &["ARM1", "BAYER"]).await?;
        submit(&ledger, "arm", "addLaboratory", &["ARM1", "GLX"]).await?;

        let raw = ledger.state_string("arm", "ARM1").unwrap_or_default();
        for needle in ["ARM1", "BAYER", "GLX"] {
            assert!(raw.contains(needle), "{needle} missing from {raw}");
        }

        let message = reject(&ledger, "arm", "addLaboratory", &["ARM1"]).await?;
        assert_eq!(message, "Incorrect number of arguments. Expecting 2");
        Ok(())
    }
}
