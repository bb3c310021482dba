//! Button hover/press visual feedback.

use bevy::picking::hover::Hovered;
use bevy::prelude::*;
use bevy::ui::Pressed;

use super::mode::ThemeMode;

/// Fills the button with the foreground color while hovered or pressed and
/// flips its label to the background color. Add alongside `Button` and
/// `BackgroundColor` on clickable UI elements.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
#[require(Hovered)]
pub struct HoverFill;

/// Background and label colors for a button in the given state.
pub fn hover_colors(mode: ThemeMode, active: bool) -> (Color, Color) {
    if active {
        (mode.foreground(), mode.background())
    } else {
        (Color::NONE, mode.foreground())
    }
}

fn apply_hover_fill(
    mode: Res<ThemeMode>,
    mut buttons: Query<
        (
            Has<Pressed>,
            Ref<Hovered>,
            Option<&Children>,
            &mut BackgroundColor,
        ),
        With<HoverFill>,
    >,
    mut labels: Query<&mut TextColor>,
) {
    for (pressed, hovered, children, mut background) in &mut buttons {
        if !mode.is_changed() && !hovered.is_changed() {
            continue;
        }
        let (fill, ink) = hover_colors(*mode, pressed || hovered.0);
        background.0 = fill;
        let Some(children) = children else {
            continue;
        };
        for child in children.iter() {
            if let Ok(mut label) = labels.get_mut(child) {
                label.0 = ink;
            }
        }
    }
}

pub fn plugin(app: &mut App) {
    app.register_type::<HoverFill>();
    app.add_systems(
        Update,
        apply_hover_fill
            .in_set(crate::AppSystems::Ui)
            .after(super::mode::apply_theme),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    use crate::theme::palette;

    fn create_hover_test_app() -> App {
        let mut app = crate::testing::create_test_app();
        app.init_resource::<ThemeMode>();
        app.add_systems(Update, apply_hover_fill);
        app
    }

    #[test]
    fn idle_button_is_transparent_with_ink_label() {
        let mut app = create_hover_test_app();
        let label = app.world_mut().spawn((Text::new("GO"), TextColor(Color::WHITE))).id();
        let button = app
            .world_mut()
            .spawn((Button, BackgroundColor(Color::BLACK), HoverFill))
            .add_child(label)
            .id();
        app.update();

        assert_eq!(
            app.world().get::<BackgroundColor>(button).map(|c| c.0),
            Some(Color::NONE)
        );
        assert_eq!(app.world().get::<TextColor>(label).map(|c| c.0), Some(palette::INK));
    }

    #[test]
    fn hovered_button_fills_with_ink() {
        let mut app = create_hover_test_app();
        let label = app.world_mut().spawn((Text::new("GO"), TextColor(Color::BLACK))).id();
        let button = app
            .world_mut()
            .spawn((Button, BackgroundColor(Color::NONE), HoverFill, Hovered(true)))
            .add_child(label)
            .id();
        app.update();

        assert_eq!(
            app.world().get::<BackgroundColor>(button).map(|c| c.0),
            Some(palette::INK)
        );
        assert_eq!(app.world().get::<TextColor>(label).map(|c| c.0), Some(palette::PAPER));
    }

    #[test]
    fn dark_mode_inverts_hover_colors() {
        assert_eq!(
            hover_colors(ThemeMode::Dark, true),
            (palette::PAPER, palette::INK)
        );
        assert_eq!(
            hover_colors(ThemeMode::Dark, false),
            (Color::NONE, palette::PAPER)
        );
    }
}
