use catalog::Catalog;
use chordmode::{ChordBinding, ChordCatalog};

use crate::{Action, Activator};

/// Pull-based source of the host's actions.
///
/// Called when the palette opens and whenever the chord engine rebuilds its
/// candidates. Each call should describe what is present right now; the
/// session never caches across calls except for the palette's own snapshot
/// taken at open.
pub trait CatalogProvider {
    /// Every enabled action currently present, in host order.
    fn discover(&mut self) -> Vec<Action>;
}

impl<F> CatalogProvider for F
where
    F: FnMut() -> Vec<Action>,
{
    fn discover(&mut self) -> Vec<Action> {
        self()
    }
}

/// A fixed list of actions, replaceable between events.
#[derive(Debug, Default, Clone)]
pub struct StaticCatalog {
    /// Current actions.
    actions: Vec<Action>,
}

impl StaticCatalog {
    /// Wrap a list of actions.
    pub fn new(actions: Vec<Action>) -> Self {
        Self { actions }
    }

    /// Build from a loaded catalog, skipping disabled entries.
    ///
    /// `activator` supplies the activation callback for each enabled entry.
    pub fn from_catalog<F>(catalog: &Catalog, mut activator: F) -> Self
    where
        F: FnMut(&catalog::ActionEntry) -> Activator,
    {
        let actions = catalog
            .enabled()
            .filter_map(|entry| Action::from_entry(entry, activator(entry)))
            .collect();
        Self { actions }
    }

    /// Replace the action list, as after a host rescan.
    pub fn replace(&mut self, actions: Vec<Action>) {
        self.actions = actions;
    }

    /// Current actions.
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }
}

impl CatalogProvider for StaticCatalog {
    fn discover(&mut self) -> Vec<Action> {
        self.actions.clone()
    }
}

/// Presents a provider's chord-bound actions to the chord engine.
pub struct ChordSource<'a, P: ?Sized>(pub &'a mut P);

impl<P: CatalogProvider + ?Sized> ChordCatalog for ChordSource<'_, P> {
    type Action = Action;

    fn bindings(&mut self) -> Vec<ChordBinding<Action>> {
        self.0
            .discover()
            .into_iter()
            .filter_map(|action| {
                let chord = action.shortcut()?.clone();
                Some(ChordBinding::new(&chord, action))
            })
            .collect()
    }
}
