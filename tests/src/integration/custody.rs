//! # Custody Flows
//!
//! SupplyChain assets moving between hauliers, and listings taken while
//! other transactions run.

#[cfg(test)]
mod tests {
    use crate::harness::{network, payload, record, submit};
    use anyhow::Result;

    async fn buy(ledger: &ledger_host::MockLedger, id: &str, agent: &str) -> Result<()> {
        submit(
            ledger,
            "supplychain",
            "buyAsset",
            &[
                id,
                "IBUPROFENO",
                "100",
                "250",
                "01/07/2018",
                agent,
                "40.41",
                "-3.70",
                "09:00",
                "",
            ],
        )
        .await?;
        Ok(())
    }

    #[tokio::test]
    async fn test_asset_custody_chain() -> Result<()> {
        let ledger = network()?;
        buy(&ledger, "ASSET1", "BAYER").await?;
        submit(
            &ledger,
            "supplychain",
            "generateTransit",
            &["ASSET1", "41.38", "2.17", "14:00", "SEUR"],
        )
        .await?;
        submit(
            &ledger,
            "supplychain",
            "generateTransit",
            &["ASSET1", "39.47", "-0.37", "20:00", "FarmaciaAluche"],
        )
        .await?;
        submit(&ledger, "supplychain", "arrival", &["ASSET1", "02/07/2018", "OK"]).await?;

        let asset = record(&ledger, "supplychain", "ASSET1")?;
        assert_eq!(asset["agent"], "FarmaciaAluche");
        let receptors: Vec<_> = asset["transits"]
            .as_array()
            .cloned()
            .unwrap_or_default()
            .iter()
            .map(|t| t["haulierreceptor"].as_str().unwrap_or_default().to_string())
            .collect();
        assert_eq!(receptors, vec!["BAYER", "SEUR", "FarmaciaAluche"]);
        assert_eq!(asset["arrival"][0]["status"], "OK");
        Ok(())
    }

    #[tokio::test]
    async fn test_listings_cover_asset_range_only() -> Result<()> {
        let ledger = network()?;
        for id in ["ASSET2", "ASSET10", "ASSET1", "ASSET3"] {
            buy(&ledger, id, "BAYER").await?;
        }
        buy(&ledger, "PALLET1", "BAYER").await?;

        let res = submit(&ledger, "supplychain", "queryAssets", &[]).await?;
        assert_eq!(
            res.payload_str(),
            r#"[{"Key":"ASSET1"},{"Key":"ASSET10"},{"Key":"ASSET2"},{"Key":"ASSET3"}]"#
        );

        let res = submit(&ledger, "supplychain", "queryAllAssets", &[]).await?;
        let listing = payload(&res)?;
        assert_eq!(listing.as_array().map(Vec::len), Some(4));
        assert_eq!(listing[0]["Record"]["type"], "IBUPROFENO");
        assert_eq!(ledger.open_cursors(), 0);
        Ok(())
    }

    #[tokio::test]
    async fn test_concurrent_custody_updates_all_commit() -> Result<()> {
        let ledger = network()?;
        buy(&ledger, "ASSET1", "BAYER").await?;

        let mut handles = Vec::new();
        for i in 0..8 {
            let ledger = ledger.clone();
            handles.push(tokio::spawn(async move {
                let id = format!("ASSET{}", 100 + i);
                ledger
                    .submit(
                        "supplychain",
                        "arrival",
                        vec![id, "02/07/2018".to_string(), "OK".to_string()],
                    )
                    .await
            }));
        }
        for handle in handles {
            assert!(handle.await?.is_ok());
        }

        let res = submit(&ledger, "supplychain", "queryAssets", &[]).await?;
        assert_eq!(payload(&res)?.as_array().map(Vec::len), Some(9));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_transits_on_one_asset_all_land() -> Result<()> {
        let ledger = network()?;
        buy(&ledger, "ASSET1", "BAYER").await?;

        let mut handles = Vec::new();
        for i in 0..48 {
            let ledger = ledger.clone();
            handles.push(tokio::spawn(async move {
                let args = ["ASSET1", "40.41", "-3.70", "10:00"]
                    .iter()
                    .map(ToString::to_string)
                    .chain([format!("HAULIER{i}")])
                    .collect();
                ledger.submit("supplychain", "generateTransit", args).await
            }));
        }
        for handle in handles {
            assert!(handle.await?.is_ok());
        }

        let asset = record(&ledger, "supplychain", "ASSET1")?;
        assert_eq!(asset["transits"].as_array().map(Vec::len), Some(49));
        Ok(())
    }

    #[tokio::test]
    async fn test_full_listing_tolerates_foreign_values() -> Result<()> {
        let ledger = network()?;
        buy(&ledger, "ASSET1", "BAYER").await?;
        ledger.seed_state("supplychain", "ASSET2", "legacy-text");

        let res = submit(&ledger, "supplychain", "queryAllAssets", &[]).await?;
        let listing = payload(&res)?;
        assert_eq!(listing[0]["Record"]["agent"], "BAYER");
        assert_eq!(listing[1]["Key"], "ASSET2");
        assert_eq!(listing[1]["Record"], "legacy-text");
        assert_eq!(ledger.open_cursors(), 0);
        Ok(())
    }
}
