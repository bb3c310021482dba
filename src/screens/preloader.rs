//! Black splash counting up to 100 % before the portfolio.

use bevy::prelude::*;

use super::Screen;
use crate::theme::palette;
use crate::widgets::counter::PRELOADER_HOLD;
use crate::widgets::{CounterFinished, CounterReadout, HoldAfterComplete, LinearCounter};

/// The counter driving this screen.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
struct PreloaderCounter;

pub(super) fn plugin(app: &mut App) {
    app.register_type::<PreloaderCounter>();
    app.add_systems(OnEnter(Screen::Preloader), spawn_preloader);
    app.add_observer(finish_preloader);
}

fn spawn_preloader(mut commands: Commands) {
    let counter = commands
        .spawn((
            Name::new("Preloader Counter"),
            PreloaderCounter,
            LinearCounter::preloader(),
            HoldAfterComplete::new(PRELOADER_HOLD),
            DespawnOnExit(Screen::Preloader),
        ))
        .id();

    commands.spawn((
        Name::new("Preloader Screen"),
        Node {
            position_type: PositionType::Absolute,
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            align_items: AlignItems::End,
            justify_content: JustifyContent::End,
            padding: UiRect::all(Val::Px(32.0)),
            ..default()
        },
        BackgroundColor(palette::INK),
        GlobalZIndex(100),
        DespawnOnExit(Screen::Preloader),
        children![(
            Text::new("0%"),
            TextFont::from_font_size(palette::FONT_SIZE_DISPLAY),
            TextColor(palette::PAPER),
            CounterReadout::Caption(counter),
        )],
    ));
}

fn finish_preloader(
    event: On<CounterFinished>,
    preloaders: Query<(), With<PreloaderCounter>>,
    mut next: ResMut<NextState<Screen>>,
) {
    if preloaders.contains(event.counter) {
        debug!("preloader finished");
        next.set(Screen::Portfolio);
    }
}
