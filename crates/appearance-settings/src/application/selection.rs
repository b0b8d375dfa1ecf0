//! Palette selection observers.
//!
//! The accent colour grid shows one swatch per palette entry, and the swatch
//! for the current accent is drawn highlighted.  When the accent changes, two
//! swatches must redraw: the one losing the highlight and the one gaining it.
//! Rather than tracking which is which, every swatch is refreshed and works
//! out its own state by asking "is my colour the current accent?".
//!
//! # Why the source is passed into `refresh` (for beginners)
//!
//! A swatch needs to *read* the current accent, but the settings store owns
//! both the accent and the list of swatches.  If each swatch kept a pointer
//! back to the store, the store would (indirectly) point at itself, which in
//! Rust means `Rc<RefCell<…>>` cycles and runtime borrow failures.
//!
//! Instead the store hands a read-only [`AccentSource`] to each observer for
//! the duration of the refresh call.  Observers can still be tested against a
//! mock source without constructing a store.

use appearance_core::{AccentColor, PaletteEntry, Rgba, SettingsRecord, PALETTE};

/// Read-only view of the currently selected accent.
#[cfg_attr(test, mockall::automock)]
pub trait AccentSource {
    /// The accent to highlight; the first palette colour when none is stored.
    fn current_accent_color(&self) -> AccentColor;
}

impl AccentSource for SettingsRecord {
    fn current_accent_color(&self) -> AccentColor {
        self.accent_or_default()
    }
}

/// A UI element whose appearance depends on which accent is selected.
pub trait SelectionObserver {
    /// The palette colour this element represents.
    fn color(&self) -> AccentColor;

    /// Whether the element was highlighted by its last refresh.
    fn is_selected(&self) -> bool;

    /// Re-derives the element's visual state from `source`.
    ///
    /// Must be idempotent and must not depend on other observers.
    fn refresh(&mut self, source: &dyn AccentSource);
}

// ── Palette swatch ────────────────────────────────────────────────────────────

/// View state of one accent swatch.
///
/// Owns no truth of its own: `selected` is a cache of the last refresh.
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteSwatch {
    entry: PaletteEntry,
    selected: bool,
}

impl PaletteSwatch {
    /// Creates an unselected swatch; call [`SelectionObserver::refresh`]
    /// before reading its state.
    pub fn new(entry: PaletteEntry) -> Self {
        Self {
            entry,
            selected: false,
        }
    }

    /// One swatch per palette entry, in display order.
    pub fn for_palette() -> Vec<PaletteSwatch> {
        PALETTE.iter().copied().map(PaletteSwatch::new).collect()
    }

    /// Fill colour of the swatch.
    pub fn rgba(&self) -> Rgba {
        self.entry.rgba
    }
}

impl SelectionObserver for PaletteSwatch {
    fn color(&self) -> AccentColor {
        self.entry.color
    }

    fn is_selected(&self) -> bool {
        self.selected
    }

    fn refresh(&mut self, source: &dyn AccentSource) {
        self.selected = source.current_accent_color() == self.entry.color;
    }
}

// ── Observer set ──────────────────────────────────────────────────────────────

/// The registered selection observers.
///
/// There is no removal: the set lives exactly as long as the settings screen.
#[derive(Default)]
pub struct SelectionObserverSet {
    observers: Vec<Box<dyn SelectionObserver>>,
}

impl SelectionObserverSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, observer: Box<dyn SelectionObserver>) {
        self.observers.push(observer);
    }

    /// Refreshes every registered observer against `source`.
    ///
    /// Observers are independent, so the iteration order carries no meaning.
    pub fn broadcast_refresh(&mut self, source: &dyn AccentSource) {
        for observer in &mut self.observers {
            observer.refresh(source);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn SelectionObserver> + '_ {
        self.observers.iter().map(|o| o.as_ref())
    }

    /// Colour of the first observer currently highlighted, if any.
    pub fn selected(&self) -> Option<AccentColor> {
        self.iter().find(|o| o.is_selected()).map(|o| o.color())
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl std::fmt::Debug for SelectionObserverSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectionObserverSet")
            .field("len", &self.observers.len())
            .field("selected", &self.selected())
            .finish()
    }
}
