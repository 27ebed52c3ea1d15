//! Headless configurator session.
//!
//! Owns the assembly, the selection and the settings, and exposes the
//! command surface the UI layer drives. Every command runs to completion
//! before the next one; failed commands leave all state untouched.

use shared::{price_breakdown, total_price, AssemblyDescription, ConfiguratorError, Face, FaceVariant, PriceBreakdown, UnitId};

use crate::export::{build_report, unix_now, AssemblyReport};
use crate::i18n;
use crate::state::{AppSettings, AssemblyState, Selection, SelectionState};
use crate::validation::AssemblyValidator;
use crate::view::{build_unit_views, status_line, UnitView};

/// Headless session over one assembly
///
/// Units, wall variants and the selection change only through the
/// operations below; the accessors hand out shared references.
pub struct Session {
    assembly: AssemblyState,
    selection: SelectionState,
    settings: AppSettings,
}

impl Session {
    /// New session with one unit at the origin.
    pub fn new() -> Self {
        Self::with_settings(AppSettings::default())
    }

    /// New session with one unit at the origin and the given settings.
    pub fn with_settings(settings: AppSettings) -> Self {
        Self {
            assembly: AssemblyState::with_initial_unit(),
            selection: SelectionState::default(),
            settings,
        }
    }

    /// New session without any units.
    pub fn empty() -> Self {
        Self {
            assembly: AssemblyState::default(),
            selection: SelectionState::default(),
            settings: AppSettings::default(),
        }
    }

    pub fn assembly(&self) -> &AssemblyState {
        &self.assembly
    }

    pub fn selection_state(&self) -> &SelectionState {
        &self.selection
    }

    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut AppSettings {
        &mut self.settings
    }

    // ── Selection ─────────────────────────────────────────────

    pub fn selection(&self) -> Selection {
        self.selection.current()
    }

    /// Pointer landed on a part of `unit`
    pub fn pointer_hit(&mut self, unit: UnitId, face: Option<Face>) -> Result<(), ConfiguratorError> {
        self.require_unit(unit)?;
        self.selection.pointer_hit(unit, face);
        Ok(())
    }

    /// Pointer missed every unit
    pub fn background_click(&mut self) {
        self.selection.background_click();
    }

    /// Select a whole unit
    pub fn select_unit(&mut self, unit: UnitId) -> Result<(), ConfiguratorError> {
        self.require_unit(unit)?;
        self.selection.select_unit(unit);
        Ok(())
    }

    /// Select a face of a unit directly
    pub fn select_face(&mut self, unit: UnitId, face: Face) -> Result<(), ConfiguratorError> {
        self.require_unit(unit)?;
        self.selection.select_face(unit, face);
        Ok(())
    }

    /// Clear selection
    pub fn deselect_all(&mut self) {
        self.selection.clear();
    }

    // ── Assembly ──────────────────────────────────────────────

    /// Attach a new unit to the selected face
    pub fn add_unit(&mut self) -> Result<UnitId, ConfiguratorError> {
        let selection = self.selection.current();
        self.assembly
            .add_unit(&selection, &self.settings.dimensions)
            .inspect_err(|e| tracing::warn!("add unit rejected: {e}"))
    }

    /// Remove the selected unit. No-op when nothing is selected.
    pub fn remove_unit(&mut self) -> Option<UnitId> {
        let unit = self.selection.selected_unit()?;
        self.remove_unit_by_id(unit).then_some(unit)
    }

    /// Remove a unit by id. Unknown ids are ignored.
    pub fn remove_unit_by_id(&mut self, unit: UnitId) -> bool {
        let removed = self.assembly.remove_unit(unit);
        if removed {
            self.selection.unit_removed(unit);
        }
        removed
    }

    /// Set the variant of `face` on the selected unit.
    /// The face itself must be the current selection.
    pub fn set_wall_variant(&mut self, face: Face, variant: FaceVariant) -> Result<(), ConfiguratorError> {
        let selection = self.selection.current();
        let unit = selection.unit().ok_or(ConfiguratorError::NoFaceSelected)?;
        self.assembly
            .set_wall_variant(&selection, unit, face, variant)
            .inspect_err(|e| tracing::warn!("wall variant rejected: {e}"))
    }

    /// Active variant of a face (base when never assigned)
    pub fn wall_variant(&self, unit: UnitId, face: Face) -> FaceVariant {
        shared::resolve_variant(self.assembly.walls(), unit, face)
    }

    /// Undo the last assembly change
    pub fn undo(&mut self) -> bool {
        if !self.assembly.can_undo() {
            return false;
        }
        self.assembly.undo();
        self.reconcile_selection();
        true
    }

    /// Redo the last undone change
    pub fn redo(&mut self) -> bool {
        if !self.assembly.can_redo() {
            return false;
        }
        self.assembly.redo();
        self.reconcile_selection();
        true
    }

    /// Remove every unit
    pub fn clear(&mut self) {
        self.assembly.clear();
        self.selection.clear();
    }

    /// Replace the assembly with a loaded description
    pub fn load(&mut self, assembly: AssemblyDescription) -> Result<(), ConfiguratorError> {
        self.assembly.set_assembly(assembly)?;
        self.reconcile_selection();
        Ok(())
    }

    /// Load an assembly from a JSON string
    pub fn load_json(&mut self, json: &str) -> Result<(), String> {
        let assembly: AssemblyDescription =
            serde_json::from_str(json).map_err(|e| format!("JSON parse error: {e}"))?;
        self.load(assembly).map_err(|e| e.to_string())
    }

    /// Export the current assembly as JSON
    pub fn export_json(&self) -> String {
        serde_json::to_string_pretty(self.assembly.description()).unwrap_or_default()
    }

    // ── Pricing, views, reports ───────────────────────────────

    pub fn total_price(&self) -> u64 {
        total_price(self.assembly.units(), self.assembly.walls(), &self.settings.prices)
    }

    pub fn price_breakdown(&self) -> PriceBreakdown {
        price_breakdown(self.assembly.units(), self.assembly.walls(), &self.settings.prices)
    }

    /// Per-unit view for the rendering adapter
    pub fn views(&self) -> Vec<UnitView> {
        build_unit_views(
            self.assembly.description(),
            &self.selection.current(),
            &self.settings.viewport,
        )
    }

    /// Status bar text in the current language
    pub fn status(&self) -> String {
        status_line(&self.selection.current(), i18n::lang())
    }

    /// Report stamped with the current time
    pub fn report(&self) -> AssemblyReport {
        self.report_at(unix_now())
    }

    /// Report stamped with an explicit time
    pub fn report_at(&self, generated_at: u64) -> AssemblyReport {
        build_report(
            self.assembly.description(),
            &self.settings.prices,
            &self.settings.export.title,
            generated_at,
        )
    }

    /// Validator for the current assembly
    pub fn validator(&self) -> AssemblyValidator<'_> {
        AssemblyValidator::new(self.assembly.description(), self.settings.dimensions)
    }

    pub fn unit_count(&self) -> usize {
        self.assembly.unit_count()
    }

    fn require_unit(&self, unit: UnitId) -> Result<(), ConfiguratorError> {
        if self.assembly.contains(unit) {
            Ok(())
        } else {
            Err(ConfiguratorError::UnknownUnit(unit))
        }
    }

    fn reconcile_selection(&mut self) {
        let assembly = &self.assembly;
        self.selection.retain_live(|id| assembly.contains(id));
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
