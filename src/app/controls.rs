//! Control strip above the canvas: toggles, buttons and readouts.

use eframe::egui;

use crate::color_scheme::ColorScheme;
use crate::controllers::ReadoutInfo;
use crate::data::hotkeys::{format_button_tooltip, Hotkeys};
use crate::events::{Action, SketchEvent};

/// Toggle state shown by the checkboxes.
pub struct ControlState {
    pub show_derivative: bool,
    pub show_integral: bool,
    pub at_default_scale: bool,
}

/// Draw the control strip and return the events the user triggered.
///
/// The colour scheme picker edits `scheme` in place; it is host state, not a
/// session event.
pub fn show_controls(
    ui: &mut egui::Ui,
    state: &ControlState,
    readouts: &ReadoutInfo,
    hotkeys: &Hotkeys,
    scheme: &mut ColorScheme,
) -> Vec<SketchEvent> {
    let mut events = Vec::new();
    let tooltip = |action: Action| format_button_tooltip(action.label(), hotkeys.get(action));

    ui.horizontal(|ui| {
        let clear = egui::Button::new(format!("{} Clear", egui_phosphor::regular::TRASH));
        if ui
            .add(clear)
            .on_hover_text(tooltip(Action::Clear))
            .clicked()
        {
            events.push(SketchEvent::Action(Action::Clear));
        }

        let reset = egui::Button::new(format!(
            "{} Reset scale",
            egui_phosphor::regular::ARROW_COUNTER_CLOCKWISE
        ));
        if ui
            .add_enabled(!state.at_default_scale, reset)
            .on_hover_text(tooltip(Action::ResetScale))
            .clicked()
        {
            events.push(SketchEvent::Action(Action::ResetScale));
        }

        ui.separator();

        let mut show_derivative = state.show_derivative;
        if ui
            .checkbox(&mut show_derivative, "Derivative")
            .on_hover_text(tooltip(Action::ToggleDerivative))
            .changed()
        {
            events.push(SketchEvent::SetDerivativeVisible(show_derivative));
        }
        let mut show_integral = state.show_integral;
        if ui
            .checkbox(&mut show_integral, "Integral")
            .on_hover_text(tooltip(Action::ToggleIntegral))
            .changed()
        {
            events.push(SketchEvent::SetIntegralVisible(show_integral));
        }

        ui.separator();
        ui.monospace(format!("f'(x) = {}", readouts.derivative));
        ui.separator();
        ui.monospace(format!("area = {}", readouts.integral));
        ui.separator();
        match readouts.cursor {
            Some([x, y]) => ui.monospace(format!("x = {x}  y = {y}")),
            None => ui.monospace("x = –  y = –"),
        };
        ui.separator();
        ui.monospace(format!("scale = {:.2} px", readouts.scale));

        ui.separator();
        egui::ComboBox::from_id_salt("color_scheme")
            .selected_text(format!("{} {}", egui_phosphor::regular::PALETTE, scheme.label()))
            .show_ui(ui, |ui| {
                for option in ColorScheme::all() {
                    ui.selectable_value(&mut *scheme, *option, option.label());
                }
            });
    });

    events
}
