use crate::error::SpecError;

/// What to do with each located invocation of a macro.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Remove the invocation together with all its argument groups.
    Delete,
    /// Replace the invocation with the inner content of one argument group.
    Preserve,
}

/// A macro name paired with the rewrite to apply to its invocations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MacroSpec {
    /// Macro name without the leading backslash.
    pub name: String,
    pub action: Action,
    /// Which group of the chain survives under [`Action::Preserve`], zero
    /// indexed. Stored but unused for [`Action::Delete`].
    pub preserved_index: usize,
}

impl MacroSpec {
    pub fn delete(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            action: Action::Delete,
            preserved_index: 0,
        }
    }

    pub fn preserve(name: impl Into<String>, preserved_index: usize) -> Self {
        Self {
            name: name.into(),
            action: Action::Preserve,
            preserved_index,
        }
    }

    /// Parses a `name:action[:index]` token as accepted on the command line.
    ///
    /// `action` is a single letter, `d` (delete) or `p` (preserve); `index`
    /// defaults to 0 when omitted. Fields past the index are ignored.
    pub fn parse(token: &str) -> Result<Self, SpecError> {
        let fields: Vec<&str> = token.split(':').collect();

        // split always yields at least one field
        let name = fields[0];
        if name.is_empty() {
            return Err(SpecError::EmptyName(token.to_string()));
        }

        let action = match fields.get(1) {
            Some(op) if op.len() == 1 => match op.as_bytes()[0] {
                b'd' => Action::Delete,
                b'p' => Action::Preserve,
                _ => return Err(SpecError::InvalidAction(token.to_string())),
            },
            _ => return Err(SpecError::MissingAction(token.to_string())),
        };

        let preserved_index = match fields.get(2) {
            None => 0,
            Some(raw) => raw
                .parse()
                .map_err(|_| SpecError::InvalidIndex(token.to_string()))?,
        };

        Ok(Self {
            name: name.to_string(),
            action,
            preserved_index,
        })
    }
}

/// Rewrites for the tracked-change macros of the easyReview and changes
/// LaTeX packages, used when the caller supplies no specifications.
///
/// Insertions keep their argument, deletions and reviewer annotations are
/// removed, and replacements keep the surviving side.
pub fn default_specs() -> Vec<MacroSpec> {
    vec![
        MacroSpec::preserve("added", 0),
        MacroSpec::delete("deleted"),
        MacroSpec::preserve("replaced", 0),
        MacroSpec::delete("comment"),
        MacroSpec::delete("highlight"),
        MacroSpec::preserve("add", 0),
        MacroSpec::delete("remove"),
        MacroSpec::preserve("replace", 1),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_delete() {
        assert_eq!(MacroSpec::parse("deleted:d").unwrap(), MacroSpec::delete("deleted"));
    }

    #[test]
    fn test_parse_preserve_default_index() {
        assert_eq!(MacroSpec::parse("added:p").unwrap(), MacroSpec::preserve("added", 0));
    }

    #[test]
    fn test_parse_preserve_with_index() {
        assert_eq!(
            MacroSpec::parse("replace:p:1").unwrap(),
            MacroSpec::preserve("replace", 1)
        );
    }

    #[test]
    fn test_parse_index_on_delete_is_kept() {
        let spec = MacroSpec::parse("note:d:3").unwrap();
        assert_eq!(spec.action, Action::Delete);
        assert_eq!(spec.preserved_index, 3);
    }

    #[test]
    fn test_parse_missing_action() {
        assert_eq!(
            MacroSpec::parse("added"),
            Err(SpecError::MissingAction("added".to_string()))
        );
        assert_eq!(
            MacroSpec::parse("added:"),
            Err(SpecError::MissingAction("added:".to_string()))
        );
    }

    #[test]
    fn test_parse_multi_letter_action() {
        assert_eq!(
            MacroSpec::parse("added:dp"),
            Err(SpecError::MissingAction("added:dp".to_string()))
        );
    }

    #[test]
    fn test_parse_invalid_action_letter() {
        assert_eq!(
            MacroSpec::parse("added:x"),
            Err(SpecError::InvalidAction("added:x".to_string()))
        );
    }

    #[test]
    fn test_parse_invalid_index() {
        assert_eq!(
            MacroSpec::parse("added:p:two"),
            Err(SpecError::InvalidIndex("added:p:two".to_string()))
        );
        assert_eq!(
            MacroSpec::parse("added:p:-1"),
            Err(SpecError::InvalidIndex("added:p:-1".to_string()))
        );
    }

    #[test]
    fn test_parse_empty_name() {
        assert_eq!(
            MacroSpec::parse(":d"),
            Err(SpecError::EmptyName(":d".to_string()))
        );
    }

    #[test]
    fn test_default_specs_cover_both_packages() {
        let specs = default_specs();
        assert_eq!(specs.len(), 8);
        assert!(specs.iter().any(|s| s.name == "added" && s.action == Action::Preserve));
        assert!(specs.iter().any(|s| s.name == "deleted" && s.action == Action::Delete));
        // the shorthand replacement keeps its second argument
        let replace = specs.iter().find(|s| s.name == "replace").unwrap();
        assert_eq!(replace.action, Action::Preserve);
        assert_eq!(replace.preserved_index, 1);
    }
}
