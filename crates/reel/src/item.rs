use derive_more::{AsRef, Deref, Display, From, Into};
use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct ItemId(String);

crate::impl_string_newtype!(ItemId);

#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct ItemName(String);

crate::impl_string_newtype!(ItemName);

/// Image source for a symbol. Only inline `data:image/svg+xml,` URIs are rendered.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct ImageUri(String);

crate::impl_string_newtype!(ImageUri);

/// A symbol on the reel. `id` and `name` are optional; callers supplying items
/// are not required to fill in either.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotItem {
    #[serde(default)]
    pub id: Option<ItemId>,
    pub image: ImageUri,
    #[serde(default)]
    pub name: Option<ItemName>,
}

impl SlotItem {
    pub fn new(id: impl Into<String>, image: ImageUri, name: impl Into<String>) -> Self {
        Self {
            id: Some(ItemId::new(id)),
            image,
            name: Some(ItemName::new(name)),
        }
    }

    /// Text drawn in place of the image when it cannot be loaded.
    pub fn caption(&self) -> &str {
        self.name
            .as_ref()
            .map(ItemName::as_str)
            .or_else(|| self.id.as_ref().map(ItemId::as_str))
            .unwrap_or("?")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_deserialize_as_none() {
        let item: SlotItem = serde_json::from_str(r#"{"image": "data:image/svg+xml,"}"#).unwrap();
        assert_eq!(item.id, None);
        assert_eq!(item.name, None);
        assert_eq!(item.caption(), "?");
    }

    #[test]
    fn test_caption_prefers_name_then_id() {
        let mut item = SlotItem::new("3", ImageUri::new(""), "Seven");
        assert_eq!(item.caption(), "Seven");

        item.name = None;
        assert_eq!(item.caption(), "3");
    }
}
