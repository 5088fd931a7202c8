//! Provider entry point: configuration and the resource catalogue.

use std::collections::BTreeMap;
use std::sync::Arc;

use edgecast_api::{EdgecastApi, EdgecastClient, WafRuleKind};

use crate::config::ProviderConfig;
use crate::error::{ApiResultExt, ProviderResult};
use crate::resource::{DynResource, ResourceContext};
use crate::resources::{
    CnameResource, CustomerResource, CustomerUserResource, GroupResource,
    MasterServerGroupResource, OriginResource, RulesEnginePolicyResource,
    SecondaryZoneGroupResource, TsigResource, WafRuleResource, WafScopesResource, ZoneResource,
};

/// A configured provider. Every resource handler it hands out shares one
/// API client and the provider-level defaults.
pub struct EdgecastProvider<A = EdgecastClient> {
    api: Arc<A>,
    context: ResourceContext,
}

impl EdgecastProvider<EdgecastClient> {
    /// Validate `config` and build the HTTP client from it.
    pub fn configure(config: &ProviderConfig) -> ProviderResult<Self> {
        config.validate()?;
        let client = EdgecastClient::new(config.client_config()).context("Configure")?;
        log::debug!(
            "[provider] configured (legacy API {}, IDS {})",
            config.api_address_legacy,
            if config.ids_credentials().is_some() { "enabled" } else { "disabled" }
        );
        Ok(Self {
            api: Arc::new(client),
            context: config.resource_context(),
        })
    }
}

impl<A> EdgecastProvider<A> {
    /// Use an already built API implementation.
    pub fn with_api(api: Arc<A>, context: ResourceContext) -> Self {
        Self { api, context }
    }

    pub fn api(&self) -> &Arc<A> {
        &self.api
    }

    pub fn context(&self) -> &ResourceContext {
        &self.context
    }
}

impl<A: EdgecastApi + 'static> EdgecastProvider<A> {
    /// Every resource handler, keyed by resource type name.
    pub fn resources(&self) -> BTreeMap<&'static str, Box<dyn DynResource>> {
        let api = || Arc::clone(&self.api);
        let ctx = || self.context.clone();
        let handlers: Vec<Box<dyn DynResource>> = vec![
            Box::new(ZoneResource::new(api(), ctx())),
            Box::new(GroupResource::new(api(), ctx())),
            Box::new(MasterServerGroupResource::new(api(), ctx())),
            Box::new(TsigResource::new(api(), ctx())),
            Box::new(SecondaryZoneGroupResource::new(api(), ctx())),
            Box::new(CnameResource::new(api(), ctx())),
            Box::new(OriginResource::new(api(), ctx())),
            Box::new(CustomerResource::new(api(), ctx())),
            Box::new(CustomerUserResource::new(api(), ctx())),
            Box::new(RulesEnginePolicyResource::new(api(), ctx())),
            Box::new(WafRuleResource::new(api(), ctx(), WafRuleKind::AccessRule)),
            Box::new(WafRuleResource::new(api(), ctx(), WafRuleKind::RateRule)),
            Box::new(WafRuleResource::new(api(), ctx(), WafRuleKind::ManagedRule)),
            Box::new(WafRuleResource::new(api(), ctx(), WafRuleKind::CustomRuleSet)),
            Box::new(WafScopesResource::new(api(), ctx())),
        ];
        handlers.into_iter().map(|h| (h.type_name(), h)).collect()
    }

    /// Look up one resource handler by type name.
    pub fn resource(&self, type_name: &str) -> Option<Box<dyn DynResource>> {
        self.resources().remove(type_name)
    }
}
