//! Expandable project rows. At most one project is open at a time.

use bevy::ecs::spawn::SpawnIter;
use bevy::prelude::*;

use crate::AppSystems;
use crate::content::Project;
use crate::theme::{Themed, palette, widget};

/// Id of the project whose details are showing.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
#[reflect(Resource)]
pub struct ExpandedProject(pub Option<&'static str>);

impl ExpandedProject {
    /// Opens `id`, or closes it if it is already open.
    pub fn toggle(&mut self, id: &'static str) {
        self.0 = if self.0 == Some(id) { None } else { Some(id) };
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.0 == Some(id)
    }
}

/// Clickable header row of a project.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct ProjectRow {
    pub project: &'static str,
}

/// Body shown only while its project is expanded.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct DetailsPanel {
    pub project: &'static str,
}

/// `+` when collapsed, `×` when expanded.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct ExpandMarker {
    pub project: &'static str,
}

pub const fn marker_glyph(expanded: bool) -> &'static str {
    if expanded { "×" } else { "+" }
}

/// Row and collapsed panel for one project. `index` is zero-based.
pub fn project_entry(index: usize, project: &'static Project) -> impl Bundle {
    (
        Name::new(project.name),
        Node {
            width: Val::Percent(100.0),
            flex_direction: FlexDirection::Column,
            ..default()
        },
        children![
            widget::rule(),
            project_row(index, project),
            details_panel(project),
        ],
    )
}

fn project_row(index: usize, project: &'static Project) -> impl Bundle {
    (
        Name::new("Project Row"),
        Button,
        ProjectRow {
            project: project.id,
        },
        Node {
            width: Val::Percent(100.0),
            padding: UiRect::axes(Val::Px(32.0), Val::Px(32.0)),
            justify_content: JustifyContent::SpaceBetween,
            align_items: AlignItems::Baseline,
            column_gap: Val::Px(32.0),
            ..default()
        },
        children![
            (widget::label(format!("{:02}", index + 1)), Pickable::IGNORE),
            (
                widget::text(project.name, palette::FONT_SIZE_HEADER),
                Node {
                    flex_grow: 1.0,
                    ..default()
                },
                Pickable::IGNORE,
            ),
            (widget::label(project.year), Pickable::IGNORE),
            (
                widget::text(marker_glyph(false), palette::FONT_SIZE_LABEL),
                ExpandMarker {
                    project: project.id,
                },
                Pickable::IGNORE,
            ),
        ],
    )
}

fn details_panel(project: &'static Project) -> impl Bundle {
    let mut facts = vec![("ROLE", project.role), ("YEAR", project.year)];
    if let Some(impact) = project.impact {
        facts.push(("IMPACT", impact));
    }
    (
        Name::new("Details Panel"),
        DetailsPanel {
            project: project.id,
        },
        Node {
            display: Display::None,
            flex_direction: FlexDirection::Column,
            padding: UiRect::axes(Val::Px(32.0), Val::Px(48.0)),
            row_gap: Val::Px(24.0),
            ..default()
        },
        Children::spawn((
            Spawn(widget::text(project.tagline, palette::FONT_SIZE_SUBHEADER)),
            Spawn(widget::text(project.description, palette::FONT_SIZE_BODY)),
            Spawn((
                Node {
                    column_gap: Val::Px(48.0),
                    ..default()
                },
                Children::spawn(SpawnIter(facts.into_iter().map(|(title, value)| {
                    (
                        Node {
                            flex_direction: FlexDirection::Column,
                            row_gap: Val::Px(8.0),
                            ..default()
                        },
                        children![
                            widget::label(title),
                            widget::text(value, palette::FONT_SIZE_BODY)
                        ],
                    )
                }))),
            )),
            Spawn(widget::label("TECH STACK")),
            Spawn((
                Node {
                    flex_wrap: FlexWrap::Wrap,
                    column_gap: Val::Px(8.0),
                    row_gap: Val::Px(8.0),
                    ..default()
                },
                Children::spawn(SpawnIter(project.tech.iter().map(|tech| {
                    (
                        Node {
                            padding: UiRect::axes(Val::Px(12.0), Val::Px(6.0)),
                            border: UiRect::all(Val::Px(1.0)),
                            ..default()
                        },
                        BorderColor::all(palette::INK),
                        Themed::Outline,
                        children![widget::text(*tech, palette::FONT_SIZE_SMALL)],
                    )
                }))),
            )),
        )),
    )
}

/// Clicks bubble, so only the row itself matches.
fn toggle_on_click(
    click: On<Pointer<Click>>,
    rows: Query<&ProjectRow>,
    mut expanded: ResMut<ExpandedProject>,
) {
    if let Ok(row) = rows.get(click.entity) {
        expanded.toggle(row.project);
    }
}

fn sync_details(
    expanded: Res<ExpandedProject>,
    mut panels: Query<(&DetailsPanel, &mut Node)>,
    mut markers: Query<(&ExpandMarker, &mut Text)>,
) {
    for (panel, mut node) in &mut panels {
        node.display = if expanded.is_expanded(panel.project) {
            Display::Flex
        } else {
            Display::None
        };
    }
    for (marker, mut text) in &mut markers {
        text.0 = marker_glyph(expanded.is_expanded(marker.project)).to_string();
    }
}

pub(super) fn plugin(app: &mut App) {
    app.register_type::<ExpandedProject>()
        .register_type::<ProjectRow>()
        .register_type::<DetailsPanel>()
        .register_type::<ExpandMarker>();
    app.init_resource::<ExpandedProject>();
    app.add_observer(toggle_on_click);

    app.add_systems(
        Update,
        sync_details
            .in_set(AppSystems::Ui)
            .run_if(resource_changed::<ExpandedProject>),
    );
}
