// src/tsdoc/tags.rs
//! Standard TSDoc tag table.

use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    /// Starts a block with a dedicated slot on the comment.
    Block(BlockSlot),
    /// Starts a block that lands in `custom_blocks`.
    Custom,
    /// A flag with no content.
    Modifier,
    /// Only valid inside `{...}`.
    Inline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockSlot {
    Param,
    TypeParam,
    Returns,
    Deprecated,
    Remarks,
    PrivateRemarks,
    See,
}

#[derive(Debug)]
pub struct TagRegistry {
    tags: HashMap<&'static str, TagKind>,
}

impl TagRegistry {
    #[must_use]
    pub fn standard() -> Self {
        let tags = HashMap::from([
            ("@param", TagKind::Block(BlockSlot::Param)),
            ("@typeParam", TagKind::Block(BlockSlot::TypeParam)),
            ("@returns", TagKind::Block(BlockSlot::Returns)),
            ("@return", TagKind::Block(BlockSlot::Returns)),
            ("@deprecated", TagKind::Block(BlockSlot::Deprecated)),
            ("@remarks", TagKind::Block(BlockSlot::Remarks)),
            ("@privateRemarks", TagKind::Block(BlockSlot::PrivateRemarks)),
            ("@see", TagKind::Block(BlockSlot::See)),
            ("@example", TagKind::Custom),
            ("@throws", TagKind::Custom),
            ("@defaultValue", TagKind::Custom),
            ("@decorator", TagKind::Custom),
            ("@alpha", TagKind::Modifier),
            ("@beta", TagKind::Modifier),
            ("@eventProperty", TagKind::Modifier),
            ("@experimental", TagKind::Modifier),
            ("@internal", TagKind::Modifier),
            ("@override", TagKind::Modifier),
            ("@packageDocumentation", TagKind::Modifier),
            ("@public", TagKind::Modifier),
            ("@readonly", TagKind::Modifier),
            ("@sealed", TagKind::Modifier),
            ("@virtual", TagKind::Modifier),
            ("@link", TagKind::Inline),
            ("@inheritDoc", TagKind::Inline),
            ("@label", TagKind::Inline),
        ]);
        Self { tags }
    }

    #[must_use]
    pub fn lookup(&self, tag_name: &str) -> Option<TagKind> {
        self.tags.get(tag_name).copied()
    }

    /// Whether a tag seen in the middle of a line starts a new block.
    #[must_use]
    pub fn starts_block(&self, tag_name: &str) -> bool {
        matches!(
            self.lookup(tag_name),
            Some(TagKind::Block(_) | TagKind::Custom | TagKind::Modifier)
        )
    }
}
