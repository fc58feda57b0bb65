// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use vault_api_rs::Error;
use vault_api_rs::Payload;
use vault_api_rs::SERVICEPROVIDERCONFIG_URN;

use super::*;

/// A read-only sweep over a live (or mock) Vault that checks the catalog
/// can reach it and that failures come back as expected.
pub struct Smoke {
    invoker: Invoker,
}

impl Smoke {
    pub fn new(invoker: Invoker) -> Self {
        Self { invoker }
    }

    pub async fn run(&self) -> anyhow::Result<()> {
        self.picklist_tests().await.context("picklist_tests")?;
        self.queue_tests().await.context("queue_tests")?;
        self.scim_provider_tests().await.context("scim_provider_tests")?;
        self.nonexistent_picklist_tests()
            .await
            .context("nonexistent_picklist_tests")?;

        Ok(())
    }

    async fn json(&self, name: &str, args: &Arguments) -> anyhow::Result<Value> {
        match self.invoker.invoke_named(name, args).await? {
            Payload::Json(value) => Ok(value),
            other => bail!("{name} returned {other:?}, expected JSON"),
        }
    }

    fn expect_success(name: &str, body: &Value) -> anyhow::Result<()> {
        if body["responseStatus"] != "SUCCESS" {
            bail!("{name} returned responseStatus {}", body["responseStatus"]);
        }

        Ok(())
    }

    async fn picklist_tests(&self) -> anyhow::Result<()> {
        let body = self.json("retrieve_all_picklists", &Arguments::new()).await?;
        Self::expect_success("retrieve_all_picklists", &body)?;

        let Some(picklists) = body["picklists"].as_array() else {
            bail!("picklists missing from response");
        };

        // Follow the first picklist to its values
        if let Some(name) = picklists.first().and_then(|p| p["name"].as_str()) {
            let args = Arguments::new().with("picklist_name", name);
            let body = self.json("retrieve_picklist_values", &args).await?;
            Self::expect_success("retrieve_picklist_values", &body)?;
        }

        Ok(())
    }

    async fn queue_tests(&self) -> anyhow::Result<()> {
        let body = self.json("retrieve_all_queues", &Arguments::new()).await?;
        Self::expect_success("retrieve_all_queues", &body)
    }

    async fn scim_provider_tests(&self) -> anyhow::Result<()> {
        let body = self.json("retrieve_scim_provider", &Arguments::new()).await?;

        let schemas = body["schemas"].as_array().cloned().unwrap_or_default();
        if !schemas.contains(&Value::from(SERVICEPROVIDERCONFIG_URN)) {
            bail!("response does not contain the ServiceProviderConfig schema");
        }

        let body = self
            .json("retrieve_scim_resource_types", &Arguments::new())
            .await?;

        let Some(resources) = body["Resources"].as_array() else {
            bail!("Resources missing from resource type list");
        };

        if !resources.iter().any(|r| r["id"] == "User") {
            bail!("no User resource type");
        }

        Ok(())
    }

    async fn nonexistent_picklist_tests(&self) -> anyhow::Result<()> {
        let args =
            Arguments::new().with("picklist_name", "vault_api_smoke_missing__c");

        // Vault reports this either as an HTTP error or as a FAILURE document
        match self.invoker.invoke_named("retrieve_picklist_values", &args).await
        {
            Err(Error::Remote { .. }) => Ok(()),

            Ok(Payload::Json(body)) if body["responseStatus"] == "FAILURE" => {
                Ok(())
            }

            Ok(other) => bail!("nonexistent picklist returned {other:?}"),

            Err(error) => Err(error.into()),
        }
    }
}
