//! Structural invariant validation.
//!
//! Runs once against the full schema before building. Each rule is
//! gated by the schema's `invariants` set, so panels that intentionally
//! break strict flow (symmetric converters, for instance) can opt out
//! of individual rules. Violations are returned as a list, never acted
//! on here; strict/lenient handling belongs to the caller.

use panelforge_core::{FlowSide, Violation};
use panelforge_schema::{Anchor, FlowAxis, GroupRole, InvariantRule, PanelSchema};

/// Check all opted-in invariants over a schema.
///
/// An empty result means the schema is structurally valid.
#[must_use]
pub fn validate(schema: &PanelSchema) -> Vec<Violation> {
    let mut violations = Vec::new();

    if schema.enforces(InvariantRule::GroupHeaders) {
        for group in &schema.groups {
            if group.header.text.trim().is_empty() {
                violations.push(Violation::MissingGroupHeader {
                    group_id: group.id.clone(),
                });
            }
        }
    }

    if let Some(process) = &schema.process {
        if schema.enforces(InvariantRule::ProcessLabel) && process.label.text.trim().is_empty() {
            violations.push(Violation::MissingProcessLabel);
        }

        if schema.enforces(InvariantRule::FlowOrder) {
            let track = flow_track(schema.layout.flow_axis);
            let process_track = track(&process.anchor);

            for group in &schema.groups {
                let group_track = track(&group.anchor);
                match group.role {
                    GroupRole::Input if group_track >= process_track => {
                        violations.push(Violation::InvalidFlowPosition {
                            group_id: group.id.clone(),
                            expected: FlowSide::Before,
                            process_track,
                        });
                    }
                    GroupRole::Output if group_track <= process_track => {
                        violations.push(Violation::InvalidFlowPosition {
                            group_id: group.id.clone(),
                            expected: FlowSide::After,
                            process_track,
                        });
                    }
                    _ => {}
                }
            }
        }
    }

    violations
}

fn flow_track(axis: FlowAxis) -> fn(&Anchor) -> u32 {
    match axis {
        FlowAxis::LeftToRight => |a| a.grid_x,
        FlowAxis::TopToBottom => |a| a.grid_y,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use panelforge_core::StyleRole;
    use panelforge_schema::{Group, GroupContent, Header, Operators, Process, ProgressSpec};
    use std::collections::BTreeSet;

    fn header(text: &str) -> Header {
        Header {
            text: text.to_string(),
            style_role: StyleRole::Input,
            alignment: panelforge_core::TextAlign::Leading,
            accessibility: None,
        }
    }

    fn group(id: &str, role: GroupRole, grid_x: u32, text: &str) -> Group {
        Group {
            id: id.to_string(),
            role,
            header: header(text),
            anchor: Anchor::cell(grid_x, 0),
            content: GroupContent::default(),
            chrome: None,
        }
    }

    fn process_at(grid_x: u32) -> Process {
        Process {
            id: "proc".to_string(),
            label: header("Smelting"),
            anchor: Anchor::cell(grid_x, 0),
            progress: ProgressSpec::default(),
            operators: Operators::default(),
        }
    }

    fn schema(groups: Vec<Group>, process: Option<Process>) -> PanelSchema {
        // Parse a minimal document to pick up field defaults, then fill.
        let mut schema: PanelSchema = serde_json::from_str(
            r#"{ "version": 1, "layout": { "grid": { "columns": 6, "rows": 3 } } }"#,
        )
        .expect("minimal schema parses");
        schema.groups = groups;
        schema.process = process;
        schema
    }

    #[test]
    fn test_valid_schema_has_no_violations() {
        let s = schema(
            vec![
                group("in", GroupRole::Input, 0, "Input"),
                group("out", GroupRole::Output, 4, "Output"),
            ],
            Some(process_at(2)),
        );
        assert!(validate(&s).is_empty());
    }

    #[test]
    fn test_missing_group_header() {
        let s = schema(vec![group("in", GroupRole::Input, 0, "  ")], None);
        let violations = validate(&s);
        assert_eq!(violations.len(), 1);
        assert!(matches!(
            &violations[0],
            Violation::MissingGroupHeader { group_id } if group_id == "in"
        ));
    }

    #[test]
    fn test_missing_process_label() {
        let mut p = process_at(2);
        p.label.text = String::new();
        let s = schema(vec![], Some(p));
        assert_eq!(validate(&s), vec![Violation::MissingProcessLabel]);
    }

    // An input-role group at gridX=3 with the process at gridX=2 must
    // be flagged.
    #[test]
    fn test_input_after_process_flagged() {
        let s = schema(
            vec![group("late", GroupRole::Input, 3, "Input")],
            Some(process_at(2)),
        );
        let violations = validate(&s);
        assert_eq!(
            violations,
            vec![Violation::InvalidFlowPosition {
                group_id: "late".to_string(),
                expected: FlowSide::Before,
                process_track: 2,
            }]
        );
    }

    #[test]
    fn test_output_before_process_flagged() {
        let s = schema(
            vec![group("early", GroupRole::Output, 1, "Output")],
            Some(process_at(2)),
        );
        assert!(matches!(
            validate(&s).as_slice(),
            [Violation::InvalidFlowPosition {
                expected: FlowSide::After,
                ..
            }]
        ));
    }

    #[test]
    fn test_output_on_process_column_flagged() {
        let s = schema(
            vec![group("on", GroupRole::Output, 2, "Output")],
            Some(process_at(2)),
        );
        assert_eq!(validate(&s).len(), 1);
    }

    #[test]
    fn test_flow_rule_skipped_without_process() {
        let s = schema(vec![group("in", GroupRole::Input, 5, "Input")], None);
        assert!(validate(&s).is_empty());
    }

    #[test]
    fn test_top_to_bottom_uses_rows() {
        let mut s = schema(
            vec![group("in", GroupRole::Input, 0, "Input")],
            Some(process_at(2)),
        );
        s.layout.flow_axis = FlowAxis::TopToBottom;
        // Both sit on row 0: input not above the process row.
        assert_eq!(validate(&s).len(), 1);

        s.process.as_mut().expect("process present").anchor.grid_y = 1;
        assert!(validate(&s).is_empty());
    }

    #[test]
    fn test_opt_out_disables_rule() {
        let mut s = schema(
            vec![group("late", GroupRole::Input, 3, "")],
            Some(process_at(2)),
        );
        s.invariants = BTreeSet::from([InvariantRule::GroupHeaders]);
        let violations = validate(&s);
        // Flow violation gated off; empty header still reported.
        assert_eq!(violations.len(), 1);
        assert!(matches!(
            &violations[0],
            Violation::MissingGroupHeader { .. }
        ));
    }

    #[test]
    fn test_non_io_roles_ignore_flow() {
        let s = schema(
            vec![
                group("fuel", GroupRole::Fuel, 5, "Fuel"),
                group("cat", GroupRole::Catalyst, 2, "Catalyst"),
            ],
            Some(process_at(2)),
        );
        assert!(validate(&s).is_empty());
    }
}
