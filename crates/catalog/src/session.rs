//! One view session: routing, component selection, playground state and
//! appearance, driven by discrete events.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use studio_core::{Breadcrumb, NavigationEffect, RouteState, Router, should_render};

use crate::appearance::AppearanceContext;
use crate::catalog::Catalog;
use crate::playground::{
    ComponentRenderer, JsxRenderer, NodeRenderer, PlaygroundState, PropControl, RenderNode,
    render_preview,
};
use crate::registry::PropValue;

/// Tabs of the playground panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PlaygroundTab {
    /// Live preview.
    #[default]
    Preview,
    /// Generated code sample.
    Code,
    /// Prop table.
    Props,
    /// Example gallery.
    Examples,
}

/// Input events, in the order the host observes them.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum StudioEvent {
    /// First read of the address bar hash.
    Mount {
        /// Raw hash
        hash: String,
    },
    /// External hash change (back/forward).
    HashChanged {
        /// Raw hash
        hash: String,
    },
    /// Link click or command-palette selection.
    Navigate {
        /// Any command-palette target form
        target: String,
    },
    /// Component picked from a selector menu.
    SelectComponent {
        /// Component name
        name: String,
    },
    /// Playground control changed.
    EditProp {
        /// Prop name
        prop: String,
        /// New value
        value: PropValue,
    },
    /// Playground tab switched.
    SelectTab {
        /// Tab
        tab: PlaygroundTab,
    },
    /// Appearance changed.
    SetAppearance {
        /// New settings
        appearance: AppearanceContext,
    },
}

/// Side effects for the host to apply.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum StudioEffect {
    /// Replace the current history entry's hash.
    ReplaceHash {
        /// Canonical hash
        hash: String,
    },
    /// Scroll an element into view.
    ScrollIntoView {
        /// Element id
        anchor: String,
    },
    /// Show the not-found page.
    ShowNotFound {
        /// Rejected section
        section: String,
    },
    /// Persist appearance settings.
    SaveAppearance {
        /// Settings to store
        appearance: AppearanceContext,
    },
}

impl From<NavigationEffect> for StudioEffect {
    fn from(effect: NavigationEffect) -> Self {
        match effect {
            NavigationEffect::ReplaceHash { hash } => StudioEffect::ReplaceHash { hash },
            NavigationEffect::ScrollIntoView { anchor } => StudioEffect::ScrollIntoView { anchor },
            NavigationEffect::ShowNotFound { section } => StudioEffect::ShowNotFound { section },
        }
    }
}

/// Snapshot of everything the view layer draws.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudioView {
    /// Active section, if any.
    pub section: Option<String>,
    /// Active item, if any.
    pub item_id: Option<String>,
    /// Whether the not-found page replaces the view.
    pub not_found: bool,
    /// Breadcrumb trail.
    pub breadcrumbs: Vec<Breadcrumb>,
    /// Whether the breadcrumb bar is shown.
    pub show_breadcrumbs: bool,
    /// Selected component name.
    pub selected: Option<String>,
    /// Active playground tab.
    pub tab: PlaygroundTab,
    /// Controls for the selected component.
    pub controls: Vec<PropControl>,
    /// Mountable live preview; `None` leaves the slot empty.
    pub preview: Option<RenderNode>,
    /// Code sample for the live preview.
    pub code: Option<String>,
    /// Appearance settings.
    pub appearance: AppearanceContext,
}

/// Mutable state of a single view session over shared catalog data.
#[derive(Debug, Clone)]
pub struct StudioSession {
    catalog: Arc<Catalog>,
    router: Router,
    selected: Option<String>,
    playground: PlaygroundState,
    tab: PlaygroundTab,
    appearance: AppearanceContext,
}

impl StudioSession {
    /// Creates an unmounted session.
    pub fn new(catalog: Arc<Catalog>, appearance: AppearanceContext) -> Self {
        let router = Router::new(Arc::clone(&catalog.site));
        Self {
            catalog,
            router,
            selected: None,
            playground: PlaygroundState::default(),
            tab: PlaygroundTab::default(),
            appearance: appearance.normalized(),
        }
    }

    /// Applies one event and returns the effects the host must perform.
    pub fn dispatch(&mut self, event: StudioEvent) -> Vec<StudioEffect> {
        let effects = match event {
            StudioEvent::Mount { hash } => {
                let effects = self.router.mount(&hash);
                self.sync_selection();
                effects
            }
            StudioEvent::HashChanged { hash } => {
                let before = self.router.state().clone();
                let effects = self.router.hash_changed(&hash);
                self.sync_selection_if_moved(&before);
                effects
            }
            StudioEvent::Navigate { target } => {
                let before = self.router.state().clone();
                let effects = self.router.navigate(&target);
                self.sync_selection_if_moved(&before);
                effects
            }
            StudioEvent::SelectComponent { name } => return self.select_component(name),
            StudioEvent::EditProp { prop, value } => {
                self.playground.apply_edit(prop, value);
                Vec::new()
            }
            StudioEvent::SelectTab { tab } => {
                self.tab = tab;
                Vec::new()
            }
            StudioEvent::SetAppearance { appearance } => {
                let appearance = appearance.normalized();
                self.appearance = appearance.clone();
                return vec![StudioEffect::SaveAppearance { appearance }];
            }
        };
        effects.into_iter().map(StudioEffect::from).collect()
    }

    /// Route state.
    pub fn route_state(&self) -> &RouteState {
        self.router.state()
    }

    /// Selected component name.
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Current playground state.
    pub fn playground(&self) -> &PlaygroundState {
        &self.playground
    }

    /// Active tab.
    pub fn tab(&self) -> PlaygroundTab {
        self.tab
    }

    /// Current appearance.
    pub fn appearance(&self) -> &AppearanceContext {
        &self.appearance
    }

    /// The catalog this session reads from.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Breadcrumbs for the active route.
    pub fn breadcrumbs(&self) -> Vec<Breadcrumb> {
        self.router.breadcrumbs()
    }

    /// Controls for the selected component; empty when nothing is configured.
    pub fn controls(&self) -> Vec<PropControl> {
        self.selected
            .as_deref()
            .and_then(|name| self.catalog.registry.lookup(name))
            .map(|config| self.playground.controls(config))
            .unwrap_or_default()
    }

    /// Live preview through any renderer. `None` leaves the slot empty.
    pub fn preview<R: ComponentRenderer>(&self, renderer: &R) -> Option<R::Output> {
        let name = self.selected.as_deref()?;
        render_preview(renderer, &self.catalog.registry, name, &self.playground)
    }

    /// Everything the view draws, in one serializable snapshot.
    pub fn view(&self) -> StudioView {
        let (section, item_id) = match self.router.current() {
            Some(route) => (Some(route.section.clone()), Some(route.item_id.clone())),
            None => (None, None),
        };
        let breadcrumbs = self.breadcrumbs();
        StudioView {
            section,
            item_id,
            not_found: matches!(self.router.state(), RouteState::NotFound { .. }),
            show_breadcrumbs: should_render(&breadcrumbs),
            breadcrumbs,
            selected: self.selected.clone(),
            tab: self.tab,
            controls: self.controls(),
            preview: self.preview(&NodeRenderer),
            code: self.preview(&JsxRenderer::code_sample()),
            appearance: self.appearance.clone(),
        }
    }

    fn select_component(&mut self, name: String) -> Vec<StudioEffect> {
        let effects = match self.catalog.component_route(&name) {
            Some(route) => self
                .router
                .navigate_to(&route.section, Some(route.item_id.as_str())),
            None => Vec::new(),
        };
        self.select(Some(name));
        effects.into_iter().map(StudioEffect::from).collect()
    }

    /// Re-derives the selection from the active route.
    fn sync_selection(&mut self) {
        let selected = self
            .router
            .current()
            .and_then(|route| self.catalog.component_for_route(route));
        self.select(selected);
    }

    /// Re-selecting the active route keeps playground edits.
    fn sync_selection_if_moved(&mut self, before: &RouteState) {
        if self.router.state() != before {
            self.sync_selection();
        }
    }

    /// Navigation resets the playground, even when re-selecting the same name.
    fn select(&mut self, selected: Option<String>) {
        self.playground = selected
            .as_deref()
            .and_then(|name| self.catalog.registry.lookup(name))
            .map(PlaygroundState::initial)
            .unwrap_or_default();
        self.tab = PlaygroundTab::Preview;
        if selected != self.selected {
            log::debug!("selected component: {:?}", selected);
        }
        self.selected = selected;
    }
}
