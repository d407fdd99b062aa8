/// Parse error for a type tag outside the closed asset variant set.
///
/// The variant set is closed at compile time ([`crate::asset::AssetType`] is
/// exhaustive), so this error only arises at deserialization boundaries where
/// a tag arrives as a string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown asset type: {0:?}")]
pub struct UnknownAssetType(pub String);
