/// Overlay state (name tags, selected-planet label, info box) and the
/// JSON snapshot the host renders its DOM from.

use glam::Vec2;
use serde::Serialize;

use crate::config::SliderDomain;
use crate::controls::{ControlPanel, Theme};
use crate::planet::Planet;

/// Hover tag over a planet, in surface pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct NameTag {
    pub visible: bool,
    pub x: f32,
    pub y: f32,
}

impl NameTag {
    pub fn show_at(&mut self, pos: Vec2) {
        self.visible = true;
        self.x = pos.x;
        self.y = pos.y;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }
}

/// What a label click did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionChange {
    Selected(usize),
    Cleared,
}

/// The zoomed planet, its floating label and the info box.
/// The label and info box are visible exactly while a planet is selected.
#[derive(Debug, Clone, Default)]
pub struct SelectionPanel {
    selected: Option<usize>,
    /// Last projected label position; kept while paused.
    label_pos: Option<Vec2>,
}

impl SelectionPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Label click: same planet deselects, another planet switches.
    pub fn toggle(&mut self, index: usize) -> SelectionChange {
        if self.selected == Some(index) {
            self.selected = None;
            SelectionChange::Cleared
        } else {
            self.selected = Some(index);
            SelectionChange::Selected(index)
        }
    }

    pub fn place_label(&mut self, pos: Vec2) {
        self.label_pos = Some(pos);
    }

    pub fn label_pos(&self) -> Option<Vec2> {
        self.label_pos
    }
}

// ── Snapshot ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SliderUi {
    pub min: f32,
    pub max: f32,
    pub step: f32,
    pub value: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanetUi {
    pub name: &'static str,
    pub label: String,
    pub highlighted: bool,
    pub slider: SliderUi,
    pub tag: NameTag,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedLabelUi {
    pub visible: bool,
    pub text: &'static str,
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InfoBoxUi {
    pub visible: bool,
    pub text: &'static str,
}

/// Everything the host needs to draw the DOM overlay for one frame.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UiSnapshot {
    pub paused: bool,
    pub pause_label: &'static str,
    pub theme: Theme,
    pub body_class: Option<&'static str>,
    pub planets: Vec<PlanetUi>,
    pub selected_label: SelectedLabelUi,
    pub info_box: InfoBoxUi,
}

impl UiSnapshot {
    pub fn capture(
        planets: &[Planet],
        controls: &ControlPanel,
        selection: &SelectionPanel,
        slider: &SliderDomain,
    ) -> Self {
        let selected = selection.selected().and_then(|i| planets.get(i));
        let label_pos = selection.label_pos().unwrap_or(Vec2::ZERO);

        Self {
            paused: controls.paused(),
            pause_label: controls.pause_label(),
            theme: controls.theme(),
            body_class: controls.theme().body_class(),
            planets: planets
                .iter()
                .map(|p| PlanetUi {
                    name: p.name(),
                    label: p.label_text(),
                    highlighted: selection.selected() == Some(p.index),
                    slider: SliderUi {
                        min: slider.min,
                        max: slider.max,
                        step: slider.step,
                        value: p.slider_value(slider),
                    },
                    tag: p.tag,
                })
                .collect(),
            selected_label: SelectedLabelUi {
                visible: selected.is_some(),
                text: selected.map_or("", |p| p.name()),
                x: label_pos.x,
                y: label_pos.y,
            },
            info_box: InfoBoxUi {
                visible: selected.is_some(),
                text: selected.map_or("", |p| p.record.info),
            },
        }
    }
}
