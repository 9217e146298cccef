//! Report section navigation state

use crate::error::{CoreError, CoreResult};
use crate::types::SectionId;

/// Tracks which report section the user is viewing.
///
/// Defaults to the first enumerated section. Navigation is purely local
/// state: it never touches the lifecycle or the report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionNavigator {
    current: SectionId,
}

impl SectionNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// The active section.
    pub fn current(&self) -> SectionId {
        self.current
    }

    /// Select a section by wire identifier.
    ///
    /// Unknown identifiers are rejected with `UnknownSection` and leave
    /// the selection unchanged.
    pub fn select(&mut self, id: &str) -> CoreResult<SectionId> {
        match SectionId::parse(id) {
            Some(section) => {
                self.current = section;
                Ok(section)
            }
            None => Err(CoreError::UnknownSection(id.to_string())),
        }
    }

    /// Move to the next section, wrapping around.
    pub fn next(&mut self) -> SectionId {
        self.current = self.current.next();
        self.current
    }

    /// Move to the previous section, wrapping around.
    pub fn prev(&mut self) -> SectionId {
        self.current = self.current.prev();
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_the_first_section() {
        let navigator = SectionNavigator::new();
        assert_eq!(navigator.current(), SectionId::AvatarUltraDetalhado);
    }

    #[test]
    fn select_by_wire_id() {
        let mut navigator = SectionNavigator::new();
        let selected = navigator.select("drivers_mentais").unwrap();
        assert_eq!(selected, SectionId::DriversMentais);
        assert_eq!(navigator.current(), SectionId::DriversMentais);
    }

    #[test]
    fn unknown_id_is_rejected_and_selection_unchanged() {
        let mut navigator = SectionNavigator::new();
        navigator.select("avatar_ultra_detalhado").unwrap();

        let err = navigator.select("bogus").unwrap_err();
        assert!(matches!(err, CoreError::UnknownSection(id) if id == "bogus"));
        assert_eq!(navigator.current(), SectionId::AvatarUltraDetalhado);
    }

    #[test]
    fn next_and_prev_move_the_selection() {
        let mut navigator = SectionNavigator::new();
        assert_eq!(navigator.next(), SectionId::EscopoPosicionamento);
        assert_eq!(navigator.prev(), SectionId::AvatarUltraDetalhado);
        // Wraps backwards to the raw-text fallback
        assert_eq!(navigator.prev(), SectionId::RawAnalysis);
    }
}
