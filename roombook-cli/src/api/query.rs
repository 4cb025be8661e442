//! Sparse query construction for the floors search.
//!
//! A key is sent only when its value differs from the default, so the
//! backend's "unset = no filter" semantics apply uniformly.

/// Transient user-specified constraints used to narrow the room search.
///
/// The seat minimum is a parsed bounded integer; validation happens where the
/// input is accepted, not at submission time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub min_seats: Option<u32>,
    pub projector: bool,
    pub whiteboard: bool,
    pub speaker_system: bool,
}

impl FilterCriteria {
    /// Query parameters for `GET /floors`, containing only non-default fields.
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(min) = self.min_seats {
            params.push(("minSeats", min.to_string()));
        }
        if self.projector {
            params.push(("projector", "true".to_string()));
        }
        if self.whiteboard {
            params.push(("whiteboard", "true".to_string()));
        }
        if self.speaker_system {
            params.push(("speakerSystem", "true".to_string()));
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_criteria_produce_no_params() {
        assert!(FilterCriteria::default().query_params().is_empty());
    }

    #[test]
    fn each_field_appears_iff_non_default() {
        let seats_only = FilterCriteria {
            min_seats: Some(10),
            ..Default::default()
        };
        assert_eq!(seats_only.query_params(), vec![("minSeats", "10".to_string())]);

        let whiteboard_only = FilterCriteria {
            whiteboard: true,
            ..Default::default()
        };
        assert_eq!(
            whiteboard_only.query_params(),
            vec![("whiteboard", "true".to_string())]
        );

        let speaker_only = FilterCriteria {
            speaker_system: true,
            ..Default::default()
        };
        assert_eq!(
            speaker_only.query_params(),
            vec![("speakerSystem", "true".to_string())]
        );
    }

    #[test]
    fn combined_filters_match_wire_keys() {
        let criteria = FilterCriteria {
            min_seats: Some(10),
            projector: true,
            ..Default::default()
        };
        assert_eq!(
            criteria.query_params(),
            vec![
                ("minSeats", "10".to_string()),
                ("projector", "true".to_string()),
            ]
        );
    }

    #[test]
    fn all_fields_set_produce_all_keys() {
        let criteria = FilterCriteria {
            min_seats: Some(4),
            projector: true,
            whiteboard: true,
            speaker_system: true,
        };
        let keys: Vec<&str> = criteria.query_params().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["minSeats", "projector", "whiteboard", "speakerSystem"]);
    }
}
