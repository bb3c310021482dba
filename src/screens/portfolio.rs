//! Main portfolio: hero, selected work, expertise, footer.

use bevy::ecs::spawn::SpawnIter;
use bevy::prelude::*;

use super::{Screen, social_buttons};
use crate::content::{self, CATEGORIES, CORE_VALUES, EXPERTISE, ProjectCategory, links};
use crate::theme::{Themed, palette, widget};
use crate::widgets::details::project_entry;
use crate::widgets::{ClockFormat, ExpandedProject, LiveClock};

pub(super) fn plugin(app: &mut App) {
    app.add_systems(
        OnEnter(Screen::Portfolio),
        (collapse_projects, spawn_portfolio),
    );
}

fn collapse_projects(mut expanded: ResMut<ExpandedProject>) {
    expanded.set_if_neq(ExpandedProject::default());
}

fn spawn_portfolio(mut commands: Commands) {
    commands.spawn((
        widget::ui_root("Portfolio Screen"),
        DespawnOnExit(Screen::Portfolio),
        children![hero(), work(), expertise(), footer()],
    ));
    commands.spawn((
        Name::new("Theme Toggle"),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(32.0),
            right: Val::Px(32.0),
            ..default()
        },
        GlobalZIndex(10),
        DespawnOnExit(Screen::Portfolio),
        children![widget::theme_toggle()],
    ));
}

fn hero() -> impl Bundle {
    (
        widget::section("Hero"),
        children![
            widget::label(content::HERO_KICKER),
            widget::text(content::HERO_TITLE, palette::FONT_SIZE_DISPLAY),
            widget::text(content::HERO_PITCH, palette::FONT_SIZE_SUBHEADER),
            (
                Name::new("Hero Actions"),
                Node {
                    column_gap: Val::Px(24.0),
                    ..default()
                },
                children![
                    widget::magnetic_button("LET'S TALK", |_: On<Pointer<Click>>| {
                        info!(link = links::MAIL, "link activated");
                    }),
                    widget::magnetic_button(
                        "VIEW WORK",
                        |_: On<Pointer<Click>>, mut expanded: ResMut<ExpandedProject>| {
                            expanded.0 = CATEGORIES
                                .first()
                                .and_then(|category| category.projects.first())
                                .map(|project| project.id);
                        },
                    ),
                ],
            ),
        ],
    )
}

fn work() -> impl Bundle {
    (
        widget::section("Selected Work"),
        Children::spawn((
            Spawn(widget::header("SELECTED WORK")),
            SpawnIter(CATEGORIES.iter().map(project_category)),
        )),
    )
}

fn project_category(category: &'static ProjectCategory) -> impl Bundle {
    (
        Name::new(category.title),
        Node {
            flex_direction: FlexDirection::Column,
            margin: UiRect::top(Val::Px(64.0)),
            ..default()
        },
        Children::spawn((
            Spawn(widget::text(category.title, palette::FONT_SIZE_SUBHEADER)),
            Spawn((
                widget::label(category.subtitle),
                Node {
                    margin: UiRect::bottom(Val::Px(24.0)),
                    ..default()
                },
            )),
            SpawnIter(
                category
                    .projects
                    .iter()
                    .enumerate()
                    .map(|(index, project)| project_entry(index, project)),
            ),
            Spawn(widget::rule()),
        )),
    )
}

fn expertise() -> impl Bundle {
    (
        widget::section("Expertise"),
        Children::spawn((
            Spawn(widget::header("EXPERTISE")),
            Spawn(widget::text("Core Values", palette::FONT_SIZE_SUBHEADER)),
            SpawnIter(CORE_VALUES.iter().map(|(title, description)| {
                (
                    Node {
                        flex_direction: FlexDirection::Column,
                        row_gap: Val::Px(8.0),
                        ..default()
                    },
                    children![
                        widget::text(*title, palette::FONT_SIZE_LABEL),
                        widget::label(*description),
                    ],
                )
            })),
            Spawn(widget::text("Tech Stack", palette::FONT_SIZE_SUBHEADER)),
            Spawn((
                Name::new("Tech Stack"),
                Node {
                    column_gap: Val::Px(32.0),
                    ..default()
                },
                Children::spawn(SpawnIter(EXPERTISE.iter().map(|expertise| {
                    (
                        Node {
                            flex_direction: FlexDirection::Column,
                            flex_grow: 1.0,
                            row_gap: Val::Px(8.0),
                            ..default()
                        },
                        Children::spawn((
                            Spawn(widget::label(expertise.category)),
                            SpawnIter(expertise.items.iter().copied().map(stack_item)),
                        )),
                    )
                }))),
            )),
        )),
    )
}

fn stack_item(item: &'static str) -> impl Bundle {
    (
        Name::new(item),
        Node {
            padding: UiRect::axes(Val::Px(16.0), Val::Px(12.0)),
            justify_content: JustifyContent::Center,
            border: UiRect::all(Val::Px(1.0)),
            ..default()
        },
        BorderColor::all(palette::INK),
        Themed::Outline,
        children![widget::text(item, palette::FONT_SIZE_BODY)],
    )
}

fn footer() -> impl Bundle {
    (
        widget::section("Footer"),
        children![
            widget::rule(),
            widget::text("LET'S BUILD\nSOMETHING", palette::FONT_SIZE_TITLE),
            widget::label(
                "Open to consulting, contract work, and interesting collaborations. \
                 If you're working on something ambitious, let's talk."
            ),
            social_buttons(),
            widget::label("ZURICH, SWITZERLAND"),
            (
                widget::text("", palette::FONT_SIZE_SUBHEADER),
                LiveClock::new(ClockFormat::HoursMinutes),
            ),
            widget::label("Designed & Engineered with Precision"),
        ],
    )
}
