//! Number-guessing game.
//!
//! While active, the game intercepts every submitted line before normal
//! command dispatch. The player has [`MAX_ATTEMPTS`] valid guesses to find a
//! number in [`MIN_TARGET`]..=[`MAX_TARGET`].

use rand::Rng;

use crate::history::Reply;

/// Smallest number the game will pick.
pub const MIN_TARGET: i64 = 1;
/// Largest number the game will pick.
pub const MAX_TARGET: i64 = 100;
/// Valid guesses allowed per game.
pub const MAX_ATTEMPTS: u32 = 7;

const PLAY_AGAIN: &str = "Type <span class=\"text-green-400\">game</span> to play again or \
                          <span class=\"text-green-400\">help</span> for other commands.";

/// State of the (single) game in a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    active: bool,
    target: i64,
    attempts: u32,
    max_attempts: u32,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a guess: optional sign and leading decimal digits; anything after
/// the digits is ignored. `None` if there are no leading digits.
/// Out-of-range magnitudes saturate so they are rejected by the range check.
pub fn parse_guess(input: &str) -> Option<i64> {
    let s = input.trim();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let magnitude = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

fn plural_attempts(n: u32) -> String {
    if n == 1 {
        "1 attempt".to_string()
    } else {
        format!("{n} attempts")
    }
}

fn hint_for(target: i64) -> &'static str {
    if target <= 25 {
        "The number is quite low (1-25)"
    } else if target <= 50 {
        "The number is in the lower middle range (26-50)"
    } else if target <= 75 {
        "The number is in the upper middle range (51-75)"
    } else {
        "The number is quite high (76-100)"
    }
}

impl GameState {
    /// An inactive game.
    pub fn new() -> Self {
        Self {
            active: false,
            target: 0,
            attempts: 0,
            max_attempts: MAX_ATTEMPTS,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The number to guess; 0 while inactive.
    pub fn target(&self) -> i64 {
        self.target
    }

    /// Valid guesses made in the current game.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Start a new game with a uniformly random target.
    pub fn start<R: Rng>(&mut self, rng: &mut R) {
        self.active = true;
        self.target = rng.random_range(MIN_TARGET..=MAX_TARGET);
        self.attempts = 0;
        self.max_attempts = MAX_ATTEMPTS;
        log::info!("Guessing game started");
    }

    /// Return to the inactive baseline.
    pub fn end(&mut self) {
        *self = Self::new();
    }

    /// Handle one submitted line.
    ///
    /// Returns `None` when the game is inactive (the caller should dispatch
    /// the line as a command); otherwise the line is consumed and the reply
    /// says what to print.
    pub fn process_input(&mut self, input: &str) -> Option<Reply> {
        if !self.active {
            return None;
        }

        let input = input.trim().to_lowercase();
        log::debug!("Game input: {input:?}");

        let reply = match input.as_str() {
            "quit" | "exit" => {
                self.end();
                log::info!("Guessing game quit");
                Reply::output([
                    "",
                    "🚪 <span class=\"text-yellow-400\">Game ended.</span> Thanks for playing!",
                    PLAY_AGAIN,
                    "",
                ])
            },
            "hint" => Reply::output([format!(
                "💡 <span class=\"text-cyan-400\">Hint:</span> {}",
                hint_for(self.target)
            )]),
            _ => match parse_guess(&input).filter(|g| (MIN_TARGET..=MAX_TARGET).contains(g)) {
                Some(guess) => self.guess(guess),
                None => Reply::error(
                    "❌ Please enter a valid number between 1 and 100, or type \"quit\" to exit.",
                ),
            },
        };
        Some(reply)
    }

    fn guess(&mut self, guess: i64) -> Reply {
        self.attempts += 1;
        let attempts = self.attempts;
        let target = self.target;

        if guess == target {
            self.end();
            log::info!("Guessing game won in {attempts} attempts");
            return Reply::output([
                String::new(),
                "🎉 <span class=\"text-green-400\">Congratulations!</span> You guessed it!"
                    .to_string(),
                format!(
                    "The number was <span class=\"text-cyan-400\">{target}</span> and you got it \
                     in <span class=\"text-yellow-400\">{}</span>!",
                    plural_attempts(attempts)
                ),
                String::new(),
                PLAY_AGAIN.to_string(),
                String::new(),
            ]);
        }

        if attempts >= self.max_attempts {
            let max = self.max_attempts;
            self.end();
            log::info!("Guessing game lost");
            return Reply::output([
                String::new(),
                "💥 <span class=\"text-red-400\">Game Over!</span>".to_string(),
                format!(
                    "You've used all {max} attempts. The number was \
                     <span class=\"text-cyan-400\">{target}</span>."
                ),
                String::new(),
                PLAY_AGAIN.to_string(),
                String::new(),
            ]);
        }

        let remaining = plural_attempts(self.max_attempts - attempts);
        let line = if guess < target {
            format!(
                "📈 <span class=\"text-yellow-400\">Too low!</span> Try a higher number. \
                 ({remaining} remaining)"
            )
        } else {
            format!(
                "📉 <span class=\"text-yellow-400\">Too high!</span> Try a lower number. \
                 ({remaining} remaining)"
            )
        };
        Reply::output([line])
    }
}
