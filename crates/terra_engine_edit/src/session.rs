use fastrand::Rng;
use terra_engine::{EngineError, Extent, Mask, Pattern, Region, RegionSelector, Vector};

use crate::{Clipboard, EditConfig, EditError, EditSession, History, Result, Tool, operations};

pub const DEFAULT_HISTORY_LIMIT: usize = 15;

/// Per-user editing state bound to one world.
///
/// Holds the selection, mask, write limit, clipboard and tool, plus the undo
/// history of remembered edit sessions.
pub struct Session<W: Extent> {
    world: W,
    history: History,
    mask: Mask,
    limit: i32,
    selector: RegionSelector,
    selection: Region,
    clipboard: Option<Clipboard>,
    tool: Tool,
    max_brush_radius: i32,
    wand_mode: bool,
    rng: Rng,
}

impl<W: Extent> Session<W> {
    pub fn new(world: W) -> Self {
        Self {
            world,
            history: History::new(DEFAULT_HISTORY_LIMIT),
            mask: Mask::Null,
            limit: -1,
            selector: RegionSelector::default(),
            selection: Region::Empty,
            clipboard: None,
            tool: Tool::None,
            max_brush_radius: EditConfig::default().max_brush_radius,
            wand_mode: false,
            rng: Rng::new(),
        }
    }

    pub fn from_config(world: W, config: &EditConfig) -> Result<Self> {
        config.validate()?;
        let mut session = Self::new(world);
        session.set_history_limit(config.history_limit)?;
        session.limit = i32::try_from(config.default_limit).map_err(|_| EngineError::invalid_range("default_limit", config.default_limit))?;
        session.max_brush_radius = config.max_brush_radius;
        session.wand_mode = config.wand_mode;
        session.rng = config.rng();
        Ok(session)
    }

    // === World ===

    pub fn world(&self) -> &W {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut W {
        &mut self.world
    }

    pub fn into_world(self) -> W {
        self.world
    }

    // === History ===

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn history_limit(&self) -> usize {
        self.history.limit()
    }

    /// Changes the number of retained edit sessions, evicting the oldest
    /// entries if the history is now too long.
    pub fn set_history_limit(&mut self, limit: i64) -> Result<()> {
        let limit = usize::try_from(limit).map_err(|_| EngineError::invalid_range("history limit", limit))?;
        self.history.set_limit(limit);
        Ok(())
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn undo(&mut self) -> Result<usize> {
        self.history.undo(&mut self.world)
    }

    pub fn redo(&mut self) -> Result<usize> {
        self.history.redo(&mut self.world)
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Opens an edit transaction over the world using the session's mask and
    /// limit. With `remember` set, its changes become one history entry when
    /// it is dropped.
    pub fn create_edit_session(&mut self, remember: bool) -> EditSession<'_> {
        EditSession::new(&mut self.world, self.mask.clone(), self.limit, remember.then_some(&mut self.history))
    }

    // === Mask & Limit ===

    pub fn mask(&self) -> &Mask {
        &self.mask
    }

    pub fn set_mask(&mut self, mask: Mask) {
        self.mask = mask;
    }

    pub fn limit(&self) -> i32 {
        self.limit
    }

    /// Writes allowed per edit session; negative means unlimited.
    pub fn set_limit(&mut self, limit: i32) {
        self.limit = limit;
    }

    // === Selection ===

    pub fn selector(&self) -> &RegionSelector {
        &self.selector
    }

    /// Replaces the selector and snapshots its region as the selection.
    pub fn set_selector(&mut self, selector: RegionSelector) {
        self.selection = selector.region();
        self.selector = selector;
    }

    pub fn select_primary(&mut self, position: Vector) -> &Region {
        self.set_selector(self.selector.select_primary(position));
        &self.selection
    }

    pub fn select_secondary(&mut self, position: Vector) -> &Region {
        self.set_selector(self.selector.select_secondary(position));
        &self.selection
    }

    pub fn selection(&self) -> &Region {
        &self.selection
    }

    pub fn set_selection(&mut self, region: Region) {
        self.selection = region;
    }

    pub fn clear_selection(&mut self) {
        self.set_selector(self.selector.clear());
    }

    // === Clipboard ===

    pub fn clipboard(&self) -> Option<&Clipboard> {
        self.clipboard.as_ref()
    }

    pub fn set_clipboard(&mut self, clipboard: Option<Clipboard>) {
        self.clipboard = clipboard;
    }

    /// Copies the selection into the clipboard; returns the number of copied cells.
    pub fn copy(&mut self) -> Result<usize> {
        if self.selection.is_empty() {
            return Err(EditError::NoSelection);
        }
        let clipboard = Clipboard::copy_from(&self.world, &self.selection)?;
        let count = clipboard.len();
        self.clipboard = Some(clipboard);
        Ok(count)
    }

    /// Copies the selection, then blanks it.
    pub fn cut(&mut self, remember: bool) -> Result<usize> {
        self.copy()?;
        let region = self.selection.clone();
        let mut edit = self.create_edit_session(remember);
        let count = operations::clear(&mut edit, &region);
        Ok(count)
    }

    /// Pastes the clipboard with its origin at `position`.
    pub fn paste(&mut self, position: Vector, remember: bool) -> Result<usize> {
        let Some(clipboard) = &self.clipboard else {
            return Err(EditError::EmptyClipboard);
        };
        let mut edit = EditSession::new(&mut self.world, self.mask.clone(), self.limit, remember.then_some(&mut self.history));
        let count = clipboard.paste_to(&mut edit, position);
        Ok(count)
    }

    /// Applies `pattern` to every position of the selection.
    pub fn set_selection_to(&mut self, pattern: &Pattern, remember: bool) -> Result<usize> {
        if self.selection.is_empty() {
            return Err(EditError::NoSelection);
        }
        let mut edit = EditSession::new(&mut self.world, self.mask.clone(), self.limit, remember.then_some(&mut self.history));
        let count = operations::set(&mut edit, &self.selection, pattern, &mut self.rng);
        Ok(count)
    }

    // === Tools ===

    pub fn tool(&self) -> &Tool {
        &self.tool
    }

    pub fn set_tool(&mut self, tool: Tool) -> Result<()> {
        if let Some(radius) = tool.radius() {
            if radius > self.max_brush_radius {
                return Err(EngineError::invalid_range(format!("{} radius", tool.name()), radius).into());
            }
        }
        self.tool = tool;
        Ok(())
    }

    pub fn max_brush_radius(&self) -> i32 {
        self.max_brush_radius
    }

    pub fn wand_mode(&self) -> bool {
        self.wand_mode
    }

    pub fn set_wand_mode(&mut self, wand_mode: bool) {
        self.wand_mode = wand_mode;
    }

    /// Applies the current tool at `position`. Tools that only read the world
    /// never open an edit session.
    pub fn use_tool(&mut self, position: Vector, remember: bool) -> usize {
        if !self.tool.is_writer() {
            return self.tool.apply(&mut self.world, position);
        }
        let mut edit = EditSession::new(&mut self.world, self.mask.clone(), self.limit, remember.then_some(&mut self.history));
        self.tool.apply(&mut edit, position)
    }

    /// Routes a click: in wand mode it sets a selection anchor, otherwise the
    /// primary button uses the tool.
    pub fn click(&mut self, position: Vector, primary: bool) -> usize {
        if self.wand_mode {
            if primary {
                self.select_primary(position);
            } else {
                self.select_secondary(position);
            }
            return 0;
        }
        if primary { self.use_tool(position, true) } else { 0 }
    }
}
