//! Resource abstraction
//!
//! A [`Resource`] implements Create/Read/Update/Delete for one managed
//! object type over a typed attribute struct. [`DynResource`] erases the
//! attribute type so the provider can hand out a single catalogue keyed by
//! type name, taking and returning plain JSON attribute bags.

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ProviderError, ProviderResult};

/// Identity and attributes of a resource as last seen remotely.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceState<A> {
    pub id: String,
    pub attributes: A,
}

impl<A> ResourceState<A> {
    pub fn new(id: impl Into<String>, attributes: A) -> Self {
        Self {
            id: id.into(),
            attributes,
        }
    }
}

/// Values shared by every resource of a provider instance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceContext {
    /// Account used when a resource does not name one.
    pub account_number: String,
    pub partner_user_id: Option<i64>,
}

impl ResourceContext {
    /// The resource's own account number, else the provider default.
    pub fn account<'a>(&'a self, declared: &'a str) -> ProviderResult<&'a str> {
        if !declared.trim().is_empty() {
            return Ok(declared);
        }
        if !self.account_number.trim().is_empty() {
            return Ok(&self.account_number);
        }
        Err(ProviderError::Validation(
            "account_number is required (on the resource or the provider)".to_string(),
        ))
    }
}

/// CRUD handlers for one resource type.
///
/// `read` returns `Ok(None)` when the object can no longer be fetched; the
/// caller should then forget the stored ID.
#[async_trait]
pub trait Resource: Send + Sync {
    type Attributes: Serialize + DeserializeOwned + Clone + Send + Sync + 'static;

    fn type_name(&self) -> &'static str;

    async fn create(
        &self,
        attrs: &Self::Attributes,
    ) -> ProviderResult<ResourceState<Self::Attributes>>;

    /// `attrs` carries the last known attributes; handlers use it for
    /// lookup context (account number, media type) and write-only fields.
    async fn read(
        &self,
        id: &str,
        attrs: &Self::Attributes,
    ) -> ProviderResult<Option<ResourceState<Self::Attributes>>>;

    async fn update(
        &self,
        id: &str,
        attrs: &Self::Attributes,
    ) -> ProviderResult<ResourceState<Self::Attributes>>;

    async fn delete(&self, id: &str, attrs: &Self::Attributes) -> ProviderResult<()>;
}

/// Read back an object right after a create or update.
///
/// When the read comes back empty the written ID and the declared attributes
/// are returned unchanged.
pub(crate) async fn read_after_write<R: Resource + ?Sized>(
    resource: &R,
    id: &str,
    attrs: &R::Attributes,
) -> ProviderResult<ResourceState<R::Attributes>> {
    match Resource::read(resource, id, attrs).await? {
        Some(state) => Ok(state),
        None => {
            log::warn!(
                "{} {id} could not be read back after write, keeping declared attributes",
                Resource::type_name(resource)
            );
            Ok(ResourceState::new(id, attrs.clone()))
        }
    }
}

/// Log a failed read and clear the ID.
pub(crate) fn cleared<T>(type_name: &str, id: &str, err: &edgecast_api::ApiError) -> Option<T> {
    log::warn!("{type_name} {id} could not be read, clearing ID: {err}");
    None
}

/// Parse a numeric resource ID.
pub(crate) fn parse_id(type_name: &str, id: &str) -> ProviderResult<i64> {
    id.trim().parse::<i64>().map_err(|_| {
        ProviderError::Validation(format!("{type_name}: invalid ID '{id}', expected an integer"))
    })
}

/// Type-erased resource over JSON attribute bags.
#[async_trait]
pub trait DynResource: Send + Sync {
    fn type_name(&self) -> &'static str;

    async fn create(&self, attrs: Value) -> ProviderResult<ResourceState<Value>>;

    async fn read(&self, id: &str, attrs: Value) -> ProviderResult<Option<ResourceState<Value>>>;

    async fn update(&self, id: &str, attrs: Value) -> ProviderResult<ResourceState<Value>>;

    async fn delete(&self, id: &str, attrs: Value) -> ProviderResult<()>;
}

fn decode<A: DeserializeOwned>(type_name: &str, attrs: Value) -> ProviderResult<A> {
    serde_json::from_value(attrs)
        .map_err(|e| ProviderError::Validation(format!("{type_name}: invalid attributes: {e}")))
}

fn encode<A: Serialize>(state: ResourceState<A>) -> ProviderResult<ResourceState<Value>> {
    Ok(ResourceState {
        id: state.id,
        attributes: serde_json::to_value(state.attributes)?,
    })
}

#[async_trait]
impl<R: Resource> DynResource for R {
    fn type_name(&self) -> &'static str {
        Resource::type_name(self)
    }

    async fn create(&self, attrs: Value) -> ProviderResult<ResourceState<Value>> {
        let attrs: R::Attributes = decode(Resource::type_name(self), attrs)?;
        encode(Resource::create(self, &attrs).await?)
    }

    async fn read(&self, id: &str, attrs: Value) -> ProviderResult<Option<ResourceState<Value>>> {
        let attrs: R::Attributes = decode(Resource::type_name(self), attrs)?;
        Resource::read(self, id, &attrs).await?.map(encode).transpose()
    }

    async fn update(&self, id: &str, attrs: Value) -> ProviderResult<ResourceState<Value>> {
        let attrs: R::Attributes = decode(Resource::type_name(self), attrs)?;
        encode(Resource::update(self, id, &attrs).await?)
    }

    async fn delete(&self, id: &str, attrs: Value) -> ProviderResult<()> {
        let attrs: R::Attributes = decode(Resource::type_name(self), attrs)?;
        Resource::delete(self, id, &attrs).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use serde::Deserialize;
    use serde_json::json;

    use super::*;

    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
    struct Attrs {
        name: String,
        #[serde(default)]
        size: u32,
    }

    #[derive(Default)]
    struct Memory {
        stored: Mutex<Option<Attrs>>,
    }

    #[async_trait]
    impl Resource for Memory {
        type Attributes = Attrs;

        fn type_name(&self) -> &'static str {
            "test_memory"
        }

        async fn create(&self, attrs: &Attrs) -> ProviderResult<ResourceState<Attrs>> {
            *self.stored.lock().unwrap() = Some(attrs.clone());
            read_after_write(self, "1", attrs).await
        }

        async fn read(&self, id: &str, _: &Attrs) -> ProviderResult<Option<ResourceState<Attrs>>> {
            Ok(self
                .stored
                .lock()
                .unwrap()
                .clone()
                .map(|a| ResourceState::new(id, a)))
        }

        async fn update(&self, id: &str, attrs: &Attrs) -> ProviderResult<ResourceState<Attrs>> {
            *self.stored.lock().unwrap() = Some(attrs.clone());
            read_after_write(self, id, attrs).await
        }

        async fn delete(&self, _: &str, _: &Attrs) -> ProviderResult<()> {
            *self.stored.lock().unwrap() = None;
            Ok(())
        }
    }

    #[tokio::test]
    async fn dyn_resource_round_trips_json() {
        let resource: Box<dyn DynResource> = Box::new(Memory::default());
        let state = resource
            .create(json!({ "name": "a", "size": 3 }))
            .await
            .unwrap();
        assert_eq!(state.id, "1");
        assert_eq!(state.attributes, json!({ "name": "a", "size": 3 }));

        resource.delete("1", json!({ "name": "a" })).await.unwrap();
        assert!(resource.read("1", json!({ "name": "a" })).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn invalid_attributes_are_rejected_at_the_boundary() {
        let resource: Box<dyn DynResource> = Box::new(Memory::default());
        let err = resource.create(json!({ "size": "big" })).await.unwrap_err();
        assert!(matches!(err, ProviderError::Validation(ref msg) if msg.starts_with("test_memory")));
    }

    #[test]
    fn account_falls_back_to_provider_default() {
        let ctx = ResourceContext {
            account_number: "DEF1".into(),
            partner_user_id: None,
        };
        assert_eq!(ctx.account("").unwrap(), "DEF1");
        assert_eq!(ctx.account("OWN2").unwrap(), "OWN2");
        assert!(ResourceContext::default().account(" ").is_err());
    }

    #[test]
    fn numeric_ids() {
        assert_eq!(parse_id("ec_cname", " 42 ").unwrap(), 42);
        assert!(parse_id("ec_cname", "abc").is_err());
    }
}
