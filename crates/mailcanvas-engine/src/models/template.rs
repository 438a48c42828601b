use crate::error::ComposerError;
use crate::models::block::Block;
use serde::{Deserialize, Serialize};

/// The ordered sequence of blocks composing an email. Order is display order
/// and a block's position is its address.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Template {
    blocks: Vec<Block>,
}

impl Template {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    /// The layout shown when nothing has been persisted yet
    pub fn default_seed() -> Self {
        Self::new(vec![
            Block::text("<h1>Your Newsletter</h1>"),
            Block::image("https://placehold.co/600x200?text=Header+Image"),
            Block::text("<p>Write the body of your email here.</p>"),
            Block::divider(),
            Block::text(
                "<p><small>You are receiving this email because you subscribed.</small></p>",
            ),
        ])
    }

    /// Parse persisted state, rejecting anything that breaks the block invariants
    pub fn from_json(json: &str) -> Result<Self, ComposerError> {
        let mut template: Template = serde_json::from_str(json)
            .map_err(|e| ComposerError::MalformedPersistedState(e.to_string()))?;

        for (index, block) in template.blocks.iter_mut().enumerate() {
            block.normalize().map_err(|reason| {
                ComposerError::MalformedPersistedState(format!("block {index}: {reason}"))
            })?;
        }

        let active = template.active_count();
        if active > 1 {
            return Err(ComposerError::MalformedPersistedState(format!(
                "{active} active blocks"
            )));
        }

        Ok(template)
    }

    pub fn to_json(&self) -> Result<String, ComposerError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub(crate) fn blocks_mut(&mut self) -> &mut Vec<Block> {
        &mut self.blocks
    }

    pub fn get(&self, index: usize) -> Option<&Block> {
        self.blocks.get(index)
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn active_index(&self) -> Option<usize> {
        self.blocks.iter().position(Block::is_active)
    }

    pub fn active(&self) -> Option<&Block> {
        self.blocks.iter().find(|b| b.is_active())
    }

    pub fn active_count(&self) -> usize {
        self.blocks.iter().filter(|b| b.is_active()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::block::BlockKind;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn test_default_seed_order() {
        let seed = Template::default_seed();
        let kinds: Vec<_> = seed.blocks().iter().map(Block::kind).collect();

        assert_eq!(
            kinds,
            vec![
                BlockKind::Text,
                BlockKind::Image,
                BlockKind::Text,
                BlockKind::Divider,
                BlockKind::Text,
            ]
        );
        assert_eq!(seed.active_count(), 0);
    }

    #[test]
    fn test_json_roundtrip_preserves_everything() {
        let mut template = Template::default_seed();
        template.blocks_mut()[2].set_active(true);

        let json = template.to_json().unwrap();
        let restored = Template::from_json(&json).unwrap();

        assert_eq!(restored, template);
        assert_eq!(restored.active_index(), Some(2));
    }

    #[test]
    fn test_parse_wire_format() {
        let json = r#"[
            {"isActive": false, "kind": 1, "content": "<p>Hi</p>"},
            {"isActive": true, "kind": 2, "content": "a.png"},
            {"isActive": false, "kind": 3}
        ]"#;

        let template = Template::from_json(json).unwrap();

        assert_eq!(template.len(), 3);
        assert_eq!(template.get(0).unwrap().content(), Some("<p>Hi</p>"));
        assert_eq!(template.active().unwrap().content(), Some("a.png"));
        assert_eq!(template.get(2).unwrap().kind(), BlockKind::Divider);
    }

    #[test]
    fn test_divider_content_is_discarded_on_load() {
        let json = r#"[{"isActive": false, "kind": 3, "content": "stray"}]"#;
        let template = Template::from_json(json).unwrap();
        assert_eq!(template.get(0).unwrap().content(), None);
    }

    #[test]
    fn test_empty_sequence_is_valid() {
        let template = Template::from_json("[]").unwrap();
        assert!(template.is_empty());
    }

    #[rstest]
    #[case::not_json("not json")]
    #[case::not_a_list(r#"{"kind": 1}"#)]
    #[case::unknown_kind(r#"[{"isActive": false, "kind": 9, "content": "x"}]"#)]
    #[case::text_without_content(r#"[{"isActive": false, "kind": 1}]"#)]
    #[case::two_active(
        r#"[{"isActive": true, "kind": 1, "content": "a"}, {"isActive": true, "kind": 1, "content": "b"}]"#
    )]
    fn test_malformed_state_rejected(#[case] json: &str) {
        let result = Template::from_json(json);
        assert!(matches!(
            result,
            Err(ComposerError::MalformedPersistedState(_))
        ));
    }
}
