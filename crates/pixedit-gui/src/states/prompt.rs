use pixedit_core::command::Command;
use pixedit_core::consts::DEFAULT_CIRCLE_RADIUS;

/// An open input dialog and the values typed so far.
#[derive(Clone, Debug, PartialEq)]
pub enum Prompt {
    Rotate {
        degrees: f64,
    },
    Circle {
        x: i64,
        y: i64,
        radius: i64,
        /// Canvas size; the centre may sit on either edge.
        width: i64,
        height: i64,
    },
}

impl Prompt {
    pub fn rotate() -> Self {
        Self::Rotate { degrees: 0.0 }
    }

    pub fn circle(width: u32, height: u32) -> Self {
        Self::Circle {
            x: 0,
            y: 0,
            radius: DEFAULT_CIRCLE_RADIUS,
            width: width as i64,
            height: height as i64,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Rotate { .. } => "Rotate Image",
            Self::Circle { .. } => "Draw Circle",
        }
    }

    /// Command issued when the dialog is confirmed.
    pub fn command(&self) -> Command {
        match *self {
            Self::Rotate { degrees } => Command::Rotate { degrees },
            Self::Circle { x, y, radius, .. } => Command::DrawCircle { x, y, radius },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotate_prompt_starts_at_zero() {
        assert_eq!(Prompt::rotate().command(), Command::Rotate { degrees: 0.0 });
    }

    #[test]
    fn test_circle_prompt_defaults() {
        let prompt = Prompt::circle(200, 100);
        assert_eq!(
            prompt.command(),
            Command::DrawCircle {
                x: 0,
                y: 0,
                radius: 10
            }
        );
        assert_eq!(prompt.title(), "Draw Circle");
    }
}
