//! JSON command protocol.
//!
//! Every session operation as a serde-tagged command, so a UI shell or a
//! script can drive the core with plain JSON.

use serde::{Deserialize, Serialize};
use shared::{ConfiguratorError, Face, FaceVariant, UnitId};

use crate::export::render_text;
use crate::i18n::{self, error_message};
use crate::session::Session;

/// A command the session can execute.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    /// Select a whole unit.
    SelectUnit { id: UnitId },
    /// Select a face of a unit.
    SelectFace { id: UnitId, face: Face },
    /// Pointer hit on a unit; `face` is absent for non-face parts.
    PointerHit {
        id: UnitId,
        #[serde(default)]
        face: Option<Face>,
    },
    /// Pointer missed every unit.
    BackgroundClick,
    /// Clear selection.
    DeselectAll,
    /// Attach a unit to the selected face.
    AddUnit,
    /// Remove the selected unit.
    RemoveUnit,
    /// Set the variant of the selected face.
    SetWallVariant { face: Face, variant: FaceVariant },
    /// Current total price and breakdown.
    GetTotalPrice,
    /// Undo the last operation.
    Undo,
    /// Redo the last undone operation.
    Redo,
    /// Remove every unit.
    Clear,
    /// List units, walls and the selection.
    Inspect,
    /// Build the assembly report.
    Export,
}

/// Response from executing a command.
#[derive(Debug, Serialize, Deserialize)]
pub struct CommandResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Localized text for the user, set on core errors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl CommandResponse {
    fn ok() -> Self {
        Self {
            success: true,
            error: None,
            message: None,
            data: None,
        }
    }

    fn ok_with_data(data: serde_json::Value) -> Self {
        Self {
            success: true,
            error: None,
            message: None,
            data: Some(data),
        }
    }

    fn err(e: &ConfiguratorError) -> Self {
        Self {
            success: false,
            error: Some(e.to_string()),
            message: Some(error_message(i18n::lang(), e).to_string()),
            data: None,
        }
    }

    fn from_result<T>(
        result: Result<T, ConfiguratorError>,
        data: impl FnOnce(T) -> Option<serde_json::Value>,
    ) -> Self {
        match result {
            Ok(value) => match data(value) {
                Some(d) => Self::ok_with_data(d),
                None => Self::ok(),
            },
            Err(e) => Self::err(&e),
        }
    }
}

/// Execute a single command on the session.
pub fn execute_command(session: &mut Session, cmd: Command) -> CommandResponse {
    match cmd {
        Command::SelectUnit { id } => {
            CommandResponse::from_result(session.select_unit(id), |_| None)
        }

        Command::SelectFace { id, face } => {
            CommandResponse::from_result(session.select_face(id, face), |_| None)
        }

        Command::PointerHit { id, face } => {
            let result = session.pointer_hit(id, face);
            let selection = session.selection();
            CommandResponse::from_result(result, |_| {
                Some(serde_json::json!({ "selection": selection }))
            })
        }

        Command::BackgroundClick => {
            session.background_click();
            CommandResponse::ok()
        }

        Command::DeselectAll => {
            session.deselect_all();
            CommandResponse::ok()
        }

        Command::AddUnit => CommandResponse::from_result(session.add_unit(), |id| {
            Some(serde_json::json!({ "id": id }))
        }),

        Command::RemoveUnit => {
            let removed = session.remove_unit();
            CommandResponse::ok_with_data(serde_json::json!({ "removed": removed }))
        }

        Command::SetWallVariant { face, variant } => {
            CommandResponse::from_result(session.set_wall_variant(face, variant), |_| None)
        }

        Command::GetTotalPrice => {
            let breakdown = session.price_breakdown();
            CommandResponse::ok_with_data(serde_json::json!({
                "total": breakdown.total,
                "breakdown": breakdown,
            }))
        }

        Command::Undo => {
            let success = session.undo();
            CommandResponse::ok_with_data(serde_json::json!({ "undone": success }))
        }

        Command::Redo => {
            let success = session.redo();
            CommandResponse::ok_with_data(serde_json::json!({ "redone": success }))
        }

        Command::Clear => {
            session.clear();
            CommandResponse::ok()
        }

        Command::Inspect => {
            let units: Vec<serde_json::Value> = session
                .assembly()
                .units()
                .iter()
                .map(|unit| {
                    let walls: serde_json::Map<String, serde_json::Value> = Face::WALLS
                        .iter()
                        .map(|&face| {
                            (
                                face.to_string(),
                                serde_json::json!(session.wall_variant(unit.id, face)),
                            )
                        })
                        .collect();
                    serde_json::json!({
                        "id": unit.id,
                        "position": unit.position,
                        "walls": walls,
                    })
                })
                .collect();
            CommandResponse::ok_with_data(serde_json::json!({
                "unit_count": units.len(),
                "units": units,
                "selection": session.selection(),
            }))
        }

        Command::Export => {
            let report = session.report();
            let text = render_text(&report, &session.settings().export);
            CommandResponse::ok_with_data(serde_json::json!({
                "report": report,
                "text": text,
            }))
        }
    }
}

/// Parse and execute a single JSON command string.
pub fn execute_json(session: &mut Session, json: &str) -> Result<CommandResponse, String> {
    let cmd: Command =
        serde_json::from_str(json).map_err(|e| format!("Invalid command JSON: {e}"))?;
    Ok(execute_command(session, cmd))
}

/// Parse and execute multiple JSON commands (array).
pub fn execute_json_batch(
    session: &mut Session,
    json: &str,
) -> Result<Vec<CommandResponse>, String> {
    let cmds: Vec<Command> =
        serde_json::from_str(json).map_err(|e| format!("Invalid commands JSON: {e}"))?;
    Ok(cmds
        .into_iter()
        .map(|cmd| execute_command(session, cmd))
        .collect())
}
