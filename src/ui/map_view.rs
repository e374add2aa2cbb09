// SPDX-License-Identifier: MPL-2.0
//! Map view: renders a map surface centered on the resolved position or the
//! configured fallback, with a marker once location resolves.
//!
//! Pure consumer of the location provider's output — the only state is
//! "have position / don't" plus the error text when resolution failed. Tile
//! fetching is out of scope; the surface draws a grid derived from the
//! Web-Mercator tile fraction of the center so panning to a new center
//! visibly shifts the map.

use crate::application::port::location::LocationError;
use crate::config::MapConfig;
use crate::domain::geo::Coordinates;
use crate::ui::design_tokens::{palette, spacing};
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::widget::{canvas, Container, Stack, Text};
use iced::{mouse, Element, Length, Point, Rectangle, Theme};

/// Rendered size of one grid tile in logical pixels.
const TILE_SIZE: f32 = 64.0;

/// Radius of the position marker head.
const MARKER_RADIUS: f32 = 7.0;

/// Map view state.
#[derive(Debug)]
pub struct State {
    fallback: Coordinates,
    fallback_zoom: u8,
    focus_zoom: u8,
    position: Option<Coordinates>,
    error: Option<String>,
}

impl State {
    /// Builds the view state from config; out-of-range fallback settings
    /// degrade to the built-in default center.
    #[must_use]
    pub fn new(config: &MapConfig) -> Self {
        let fallback = Coordinates::new(config.fallback_latitude, config.fallback_longitude)
            .unwrap_or_else(|| {
                Coordinates::new(
                    crate::config::defaults::FALLBACK_LATITUDE,
                    crate::config::defaults::FALLBACK_LONGITUDE,
                )
                .unwrap_or_else(|| unreachable!("built-in fallback center is valid"))
            });

        Self {
            fallback,
            fallback_zoom: config.zoom,
            focus_zoom: config.focus_zoom,
            position: None,
            error: None,
        }
    }

    /// Applies the outcome of the one-shot location request. On success the
    /// map re-centers on the position with the closer focus zoom; on failure
    /// it keeps the fallback center and shows the error.
    pub fn location_resolved(&mut self, outcome: Result<Coordinates, LocationError>) {
        match outcome {
            Ok(position) => {
                tracing::debug!(%position, "location resolved, re-centering map");
                self.position = Some(position);
                self.error = None;
            }
            Err(err) => {
                tracing::warn!(error = %err, "location request failed, keeping fallback center");
                self.error = Some(format!("Error fetching location: {err}"));
            }
        }
    }

    /// Current map center: the resolved position, or the fallback.
    #[must_use]
    pub fn center(&self) -> Coordinates {
        self.position.unwrap_or(self.fallback)
    }

    /// Current zoom level; tightens once a position is available.
    #[must_use]
    pub fn zoom(&self) -> u8 {
        if self.position.is_some() {
            self.focus_zoom
        } else {
            self.fallback_zoom
        }
    }

    #[must_use]
    pub fn has_position(&self) -> bool {
        self.position.is_some()
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Render the map surface with its overlays.
    pub fn view<'a, Message: 'a>(&'a self) -> Element<'a, Message> {
        let surface = canvas::Canvas::new(MapCanvas {
            center: self.center(),
            zoom: self.zoom(),
            marker: self.has_position(),
        })
        .width(Length::Fill)
        .height(Length::Fill);

        let readout = Container::new(Text::new(format!("{} · z{}", self.center(), self.zoom())).size(12))
            .padding([spacing::XXS, spacing::XS])
            .style(styles::container::overlay_readout);

        let mut stack = Stack::new().push(surface).push(
            Container::new(readout)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(Horizontal::Left)
                .align_y(iced::alignment::Vertical::Bottom)
                .padding(spacing::XS),
        );

        if let Some(error) = &self.error {
            let banner = Container::new(Text::new(error.clone()).size(14))
                .padding([spacing::XS, spacing::MD])
                .style(styles::container::error_banner);

            stack = stack.push(
                Container::new(banner)
                    .width(Length::Fill)
                    .align_x(Horizontal::Center)
                    .padding(spacing::MD),
            );
        }

        stack.into()
    }
}

/// Canvas program drawing the grid surface and the position marker.
#[derive(Debug, Clone, Copy)]
struct MapCanvas {
    center: Coordinates,
    zoom: u8,
    marker: bool,
}

impl<Message> canvas::Program<Message> for MapCanvas {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        frame.fill_rectangle(Point::ORIGIN, bounds.size(), palette::MAP_LAND);

        // Grid anchored to the tile fraction of the center, so a new center
        // shifts the surface instead of redrawing the same static pattern.
        let (tile_x, tile_y) = self.center.tile_fraction(self.zoom);
        let offset_x = (tile_x.fract() as f32) * TILE_SIZE;
        let offset_y = (tile_y.fract() as f32) * TILE_SIZE;

        let cols = (bounds.width / TILE_SIZE).ceil() as i64 + 2;
        let rows = (bounds.height / TILE_SIZE).ceil() as i64 + 2;
        let base_col = tile_x.floor() as i64 - cols / 2;
        let base_row = tile_y.floor() as i64 - rows / 2;

        for row in 0..rows {
            for col in 0..cols {
                let x = col as f32 * TILE_SIZE - offset_x;
                let y = row as f32 * TILE_SIZE - offset_y;

                // Deterministic water patches keyed by tile index.
                let world_col = base_col + col;
                let world_row = base_row + row;
                if (world_col * 31 + world_row * 17).rem_euclid(11) == 0 {
                    let patch = canvas::Path::rectangle(
                        Point::new(x, y),
                        iced::Size::new(TILE_SIZE + 0.5, TILE_SIZE + 0.5),
                    );
                    frame.fill(&patch, palette::MAP_WATER);
                }
            }
        }

        let grid_stroke = canvas::Stroke::default()
            .with_color(palette::MAP_GRID)
            .with_width(1.0);

        for col in 0..cols {
            let x = col as f32 * TILE_SIZE - offset_x;
            let line = canvas::Path::line(Point::new(x, 0.0), Point::new(x, bounds.height));
            frame.stroke(&line, grid_stroke.clone());
        }
        for row in 0..rows {
            let y = row as f32 * TILE_SIZE - offset_y;
            let line = canvas::Path::line(Point::new(0.0, y), Point::new(bounds.width, y));
            frame.stroke(&line, grid_stroke.clone());
        }

        if self.marker {
            let anchor = Point::new(bounds.width / 2.0, bounds.height / 2.0);
            let head = Point::new(anchor.x, anchor.y - MARKER_RADIUS * 2.0);

            let stem = canvas::Path::new(|builder| {
                builder.move_to(anchor);
                builder.line_to(Point::new(head.x - MARKER_RADIUS * 0.8, head.y));
                builder.line_to(Point::new(head.x + MARKER_RADIUS * 0.8, head.y));
                builder.close();
            });
            frame.fill(&stem, palette::PRIMARY_500);

            let circle = canvas::Path::circle(head, MARKER_RADIUS);
            frame.fill(&circle, palette::PRIMARY_500);
            let pupil = canvas::Path::circle(head, MARKER_RADIUS * 0.4);
            frame.fill(&pupil, palette::WHITE);
        }

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MapConfig;
    use crate::test_utils::{assert_abs_diff_eq, F64_EPSILON};

    fn state() -> State {
        State::new(&MapConfig::default())
    }

    #[test]
    fn starts_on_fallback_center_without_marker() {
        let state = state();
        assert!(!state.has_position());
        assert_abs_diff_eq!(state.center().latitude(), 20.0, epsilon = F64_EPSILON);
        assert_abs_diff_eq!(state.center().longitude(), 80.0, epsilon = F64_EPSILON);
        assert_eq!(state.zoom(), 13);
        assert!(state.error().is_none());
    }

    #[test]
    fn resolve_success_recenters_and_zooms_in() {
        let mut state = state();
        let position = Coordinates::new(48.85, 2.29).expect("valid coordinates");
        state.location_resolved(Ok(position));

        assert!(state.has_position());
        assert_eq!(state.center(), position);
        assert_eq!(state.zoom(), 16);
        assert!(state.error().is_none());
    }

    #[test]
    fn resolve_failure_keeps_fallback_and_surfaces_error() {
        let mut state = state();
        state.location_resolved(Err(LocationError::Unavailable));

        assert!(!state.has_position());
        assert_eq!(state.zoom(), 13);
        let error = state.error().expect("error should be surfaced");
        assert!(error.contains("Error fetching location"));
    }

    #[test]
    fn invalid_fallback_config_degrades_to_builtin_center() {
        let config = MapConfig {
            fallback_latitude: 999.0,
            ..MapConfig::default()
        };
        let state = State::new(&config);
        assert_abs_diff_eq!(state.center().latitude(), 20.0, epsilon = F64_EPSILON);
    }

    #[test]
    fn view_renders_with_and_without_error() {
        let mut state = state();
        {
            let _element: Element<'_, ()> = state.view();
        }
        state.location_resolved(Err(LocationError::Denied));
        let _element: Element<'_, ()> = state.view();
    }
}
