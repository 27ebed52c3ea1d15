//! Assembly registry
//!
//! Owns the placed units, their wall variants, the id counter and the
//! undo/redo history. Mutation happens only through the operations here.

mod display;
mod history;
mod unit_ops;

pub use display::{format_position, format_price, price_in_thousands, unit_display_name};

use shared::{AssemblyDescription, ConfiguratorError, Unit, UnitId, WallAssignments};

/// Maximum number of undo snapshots kept
const UNDO_LIMIT: usize = 100;

/// Assembly state with undo/redo history
pub struct AssemblyState {
    /// Current units and wall variants
    assembly: AssemblyDescription,
    /// Undo stack - previous states
    undo_stack: Vec<AssemblyDescription>,
    /// Redo stack - undone states
    redo_stack: Vec<AssemblyDescription>,
    /// Monotonically increasing version counter for cache invalidation
    version: u64,
    /// Next unit id; never rewinds, not even on undo
    next_id: UnitId,
}

impl Default for AssemblyState {
    fn default() -> Self {
        Self {
            assembly: AssemblyDescription::default(),
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            version: 0,
            next_id: 1,
        }
    }
}

impl AssemblyState {
    /// Assembly with a single unit at the origin and no history
    pub fn with_initial_unit() -> Self {
        let mut state = Self::default();
        state.next_id = 2;
        state.assembly.units.push(Unit {
            id: 1,
            position: [0.0, 0.0, 0.0],
        });
        state
    }

    /// Current assembly version (increments on every mutation)
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Read-only view of the current assembly
    pub fn description(&self) -> &AssemblyDescription {
        &self.assembly
    }

    pub fn units(&self) -> &[Unit] {
        &self.assembly.units
    }

    pub fn walls(&self) -> &WallAssignments {
        &self.assembly.walls
    }

    pub fn unit_count(&self) -> usize {
        self.assembly.units.len()
    }

    /// Get a unit by ID
    pub fn get_unit(&self, id: UnitId) -> Option<&Unit> {
        self.assembly.get_unit(id)
    }

    pub fn contains(&self, id: UnitId) -> bool {
        self.assembly.contains(id)
    }

    /// Id the next added unit will receive
    pub fn peek_next_id(&self) -> UnitId {
        self.next_id
    }

    fn issue_id(&mut self) -> Result<UnitId, ConfiguratorError> {
        let id = self.next_id;
        self.next_id = id.checked_add(1).ok_or(ConfiguratorError::IdSpaceExhausted)?;
        Ok(id)
    }

    /// Save current state to undo stack and drop the redo branch
    fn save_undo(&mut self) {
        self.undo_stack.push(self.assembly.clone());
        if self.undo_stack.len() > UNDO_LIMIT {
            self.undo_stack.remove(0);
        }
        self.redo_stack.clear();
    }
}
