use crate::error::ComposerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Content given to a block created from the palette.
pub const FRESH_TEXT_CONTENT: &str = "<p>New text block</p>";
pub const FRESH_IMAGE_CONTENT: &str = "https://placehold.co/600x200";

/// Runtime identity of a block, used by the UI as a stable render key.
///
/// Never persisted. Operations still address blocks by position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockId(Uuid);

impl BlockId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for BlockId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown block kind {0}")]
pub struct UnknownBlockKind(pub u8);

/// The kind of a template element. Persisted as 1 (text), 2 (image), 3 (divider).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum BlockKind {
    Text,
    Image,
    Divider,
}

impl BlockKind {
    pub const ALL: [BlockKind; 3] = [BlockKind::Text, BlockKind::Image, BlockKind::Divider];

    /// Tag carried by a drag payload for this kind
    pub fn tag(self) -> &'static str {
        match self {
            BlockKind::Text => "text",
            BlockKind::Image => "image",
            BlockKind::Divider => "divider",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BlockKind::Text => "Text",
            BlockKind::Image => "Image",
            BlockKind::Divider => "Divider",
        }
    }

    /// Whether blocks of this kind carry a content string
    pub fn has_content(self) -> bool {
        !matches!(self, BlockKind::Divider)
    }
}

impl From<BlockKind> for u8 {
    fn from(kind: BlockKind) -> Self {
        match kind {
            BlockKind::Text => 1,
            BlockKind::Image => 2,
            BlockKind::Divider => 3,
        }
    }
}

impl TryFrom<u8> for BlockKind {
    type Error = UnknownBlockKind;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(BlockKind::Text),
            2 => Ok(BlockKind::Image),
            3 => Ok(BlockKind::Divider),
            other => Err(UnknownBlockKind(other)),
        }
    }
}

/// Parses a drop payload tag (case-insensitive, surrounding whitespace ignored)
impl FromStr for BlockKind {
    type Err = ComposerError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        let normalized = tag.trim().to_ascii_lowercase();
        BlockKind::ALL
            .into_iter()
            .find(|kind| kind.tag() == normalized)
            .ok_or_else(|| ComposerError::UnrecognizedDropPayload(tag.to_string()))
    }
}

/// A single template element.
///
/// Fields are only mutated through [`crate::Store`], which keeps the
/// single-active-block invariant.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    #[serde(skip)]
    id: BlockId,
    kind: BlockKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    content: Option<String>,
    #[serde(default)]
    is_active: bool,
}

impl Block {
    /// Create an inactive block. Dividers drop any content; text and image
    /// blocks without content get an empty string.
    pub fn new(kind: BlockKind, content: Option<String>) -> Self {
        let content = if kind.has_content() {
            Some(content.unwrap_or_default())
        } else {
            None
        };
        Self {
            id: BlockId::new(),
            kind,
            content,
            is_active: false,
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self::new(BlockKind::Text, Some(content.into()))
    }

    pub fn image(src: impl Into<String>) -> Self {
        Self::new(BlockKind::Image, Some(src.into()))
    }

    pub fn divider() -> Self {
        Self::new(BlockKind::Divider, None)
    }

    /// A new block of `kind` with placeholder content, as created by a palette drop
    pub fn fresh(kind: BlockKind) -> Self {
        match kind {
            BlockKind::Text => Self::text(FRESH_TEXT_CONTENT),
            BlockKind::Image => Self::image(FRESH_IMAGE_CONTENT),
            BlockKind::Divider => Self::divider(),
        }
    }

    /// Copy kind and content into a new, inactive block with its own id
    pub fn duplicate(&self) -> Self {
        Self::new(self.kind, self.content.clone())
    }

    pub fn id(&self) -> BlockId {
        self.id
    }

    pub fn kind(&self) -> BlockKind {
        self.kind
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub(crate) fn set_active(&mut self, active: bool) {
        self.is_active = active;
    }

    /// Dividers never hold content, so the update is dropped for them
    pub(crate) fn set_content(&mut self, content: String) {
        if self.kind.has_content() {
            self.content = Some(content);
        }
    }

    /// Bring a deserialized block into canonical shape.
    ///
    /// Returns an error message when a text or image block has no content.
    pub(crate) fn normalize(&mut self) -> Result<(), String> {
        match (self.kind, &self.content) {
            (BlockKind::Divider, _) => {
                self.content = None;
                Ok(())
            }
            (kind, None) => Err(format!("{} block without content", kind.label())),
            (_, Some(_)) => Ok(()),
        }
    }
}

/// Equality ignores the runtime id
impl PartialEq for Block {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.content == other.content
            && self.is_active == other.is_active
    }
}

impl Eq for Block {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("text", BlockKind::Text)]
    #[case("image", BlockKind::Image)]
    #[case("divider", BlockKind::Divider)]
    #[case("  Image ", BlockKind::Image)]
    #[case("DIVIDER", BlockKind::Divider)]
    fn test_parse_drop_tag(#[case] tag: &str, #[case] expected: BlockKind) {
        assert_eq!(tag.parse::<BlockKind>().unwrap(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("video")]
    #[case("1")]
    fn test_parse_unknown_drop_tag(#[case] tag: &str) {
        let result = tag.parse::<BlockKind>();
        assert!(matches!(
            result,
            Err(ComposerError::UnrecognizedDropPayload(ref t)) if t == tag
        ));
    }

    #[rstest]
    #[case(BlockKind::Text, 1)]
    #[case(BlockKind::Image, 2)]
    #[case(BlockKind::Divider, 3)]
    fn test_kind_wire_numbers(#[case] kind: BlockKind, #[case] number: u8) {
        assert_eq!(u8::from(kind), number);
        assert_eq!(BlockKind::try_from(number).unwrap(), kind);
    }

    #[test]
    fn test_unknown_kind_number() {
        assert!(BlockKind::try_from(0).is_err());
        assert!(BlockKind::try_from(4).is_err());
    }

    #[test]
    fn test_divider_drops_content() {
        let block = Block::new(BlockKind::Divider, Some("ignored".to_string()));
        assert_eq!(block.content(), None);
    }

    #[test]
    fn test_text_without_content_gets_empty_string() {
        let block = Block::new(BlockKind::Text, None);
        assert_eq!(block.content(), Some(""));
    }

    #[test]
    fn test_duplicate_is_inactive_with_new_id() {
        let mut original = Block::text("<p>X</p>");
        original.set_active(true);

        let copy = original.duplicate();

        assert_eq!(copy.kind(), BlockKind::Text);
        assert_eq!(copy.content(), Some("<p>X</p>"));
        assert!(!copy.is_active());
        assert_ne!(copy.id(), original.id());
    }

    #[test]
    fn test_equality_ignores_id() {
        assert_eq!(Block::text("same"), Block::text("same"));
        assert_ne!(Block::text("same"), Block::image("same"));
    }

    #[test]
    fn test_set_content_ignored_for_divider() {
        let mut block = Block::divider();
        block.set_content("<p>nope</p>".to_string());
        assert_eq!(block.content(), None);
    }

    #[test]
    fn test_serialized_shape() {
        let mut block = Block::image("logo.png");
        block.set_active(true);

        let json = serde_json::to_string(&block).unwrap();
        assert_eq!(json, r#"{"kind":2,"content":"logo.png","isActive":true}"#);

        let json = serde_json::to_string(&Block::divider()).unwrap();
        assert_eq!(json, r#"{"kind":3,"isActive":false}"#);
    }
}
