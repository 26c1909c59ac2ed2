use tracing::debug;
use voxel_api::data::{DEFAULT_FLYING_SPEED, DEFAULT_WALKING_SPEED};
use voxel_api::prelude::*;
use voxel_api::text::template::BoxedTextElement;

// ============================================================================
// Movement HUD
// ============================================================================

/// Shows who is moving how fast.
///
/// Every line is produced by text elements, so the HUD works on anything that
/// exposes the right keys: a live player, a [`MovementSpeed`] manipulator or a
/// plain [`DataMap`] snapshot.
pub struct MovementHud {
    name: BoxedTextElement<dyn ValueContainer>,
    walk: BoxedTextElement<dyn ValueContainer>,
    fly: BoxedTextElement<dyn ValueContainer>,
    formatter: CommandFormatter,
}

impl MovementHud {
    pub fn new() -> Self {
        Self::with_formatter(CommandFormatter::default())
    }

    /// A HUD reporting errors in the colours from `settings`.
    pub fn with_settings(settings: &ApiSettings) -> Self {
        Self::with_formatter(settings.commands.formatter())
    }

    pub fn with_formatter(formatter: CommandFormatter) -> Self {
        Self {
            name: template::fallback_text(template::player_display_name(), "Unknown").boxed(),
            walk: speed_element("walk", keys::WALKING_SPEED, DEFAULT_WALKING_SPEED),
            fly: speed_element("fly", keys::FLYING_SPEED, DEFAULT_FLYING_SPEED),
            formatter,
        }
    }

    /// `<name> | walk <speed> | fly <speed>` for one player.
    pub fn render<C: ValueContainer + 'static>(&self, player: &C) -> Text {
        let player: &dyn ValueContainer = player;
        let separator = Text::builder()
            .append(command::space_text())
            .append(command::pipe_text())
            .append(command::space_text())
            .build();

        let line = Text::join(
            &separator,
            [
                self.name.create(player),
                self.walk.create(player),
                self.fly.create(player),
            ],
        );
        debug!("Rendered movement line: {}", line);
        line
    }

    /// One line per player; players that render to nothing are left out.
    pub fn render_roster<C: ValueContainer + 'static>(&self, players: &[C]) -> Text {
        let line = template::function(|player: &C| self.render(player));
        template::iterable::<C, _>(line, command::newline_text()).create_from_iter(players)
    }

    /// An error line for a rejected speed change.
    pub fn report_invalid(&self, error: &DataError) -> Text {
        debug!("Reporting rejected movement data: {}", error);
        self.formatter.error(&Text::of(error.to_string()))
    }
}

impl Default for MovementHud {
    fn default() -> Self {
        Self::new()
    }
}

fn speed_element(
    label: &'static str,
    key: Key<f64>,
    default: f64,
) -> BoxedTextElement<dyn ValueContainer> {
    template::function::<dyn ValueContainer, _>(move |player| {
        Text::of(format!("{label} {}", player.get_or_else(&key, default)))
    })
    .boxed()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(name: &str, walk: f64, fly: f64) -> DataMap {
        DataMap::new()
            .with(&keys::DISPLAY_NAME, Text::of(name))
            .with(&keys::WALKING_SPEED, walk)
            .with(&keys::FLYING_SPEED, fly)
    }

    #[test]
    fn test_render_full_player() {
        let hud = MovementHud::new();
        let line = hud.render(&player("Alex", 0.2, 0.1));
        assert_eq!(line.to_plain(), "Alex | walk 0.2 | fly 0.1");
    }

    #[test]
    fn test_render_uses_fallbacks() {
        let hud = MovementHud::new();
        assert_eq!(
            hud.render(&DataMap::new()).to_plain(),
            "Unknown | walk 0.1 | fly 0.05"
        );

        let blank_name = DataMap::new().with(&keys::DISPLAY_NAME, Text::empty());
        assert!(hud.render(&blank_name).to_plain().starts_with("Unknown |"));
    }

    #[test]
    fn test_render_manipulator_directly() {
        let hud = MovementHud::new();
        let speeds = MovementSpeed::with_speeds(0.3, 0.0).unwrap();
        assert_eq!(hud.render(&speeds).to_plain(), "Unknown | walk 0.3 | fly 0");
    }

    #[test]
    fn test_render_roster() {
        let hud = MovementHud::new();
        let roster = hud.render_roster(&[player("Alex", 0.1, 0.05), player("Steve", 0.2, 0.1)]);
        assert_eq!(
            roster.to_plain(),
            "Alex | walk 0.1 | fly 0.05\nSteve | walk 0.2 | fly 0.1"
        );

        assert!(hud.render_roster::<DataMap>(&[]).is_empty());
    }

    #[test]
    fn test_report_invalid() {
        let hud = MovementHud::new();
        let mut speeds = MovementSpeed::new();
        let error = speeds.walk_speed_mut().set(-1.0).unwrap_err();

        let report = hud.report_invalid(&error);
        assert_eq!(report.color(), Some(TextColor::Red));
        assert!(report.to_plain().contains("walking_speed"));
    }
}
