//! Terminal presenter for headless runs

use super::Presenter;
use crate::sim::Scene;

/// Prints a one-line status at a fixed frame interval, plus the banner
/// text when the session ends.
pub struct ConsolePresenter {
    every: u64,
    frames: u64,
}

impl ConsolePresenter {
    /// `every` is the number of frames between status lines, usually the
    /// tick rate so one line lands per second.
    pub fn new(every: u64) -> Self {
        Self {
            every: every.max(1),
            frames: 0,
        }
    }
}

impl Presenter for ConsolePresenter {
    fn present(&mut self, scene: &Scene) {
        if scene.phase.is_terminal() {
            for line in &scene.texts {
                println!("{}", line.text);
            }
            return;
        }
        if self.frames % self.every == 0 {
            println!("{}", status_line(scene));
        }
        self.frames += 1;
    }
}

fn status_line(scene: &Scene) -> String {
    let hud: Vec<&str> = scene.texts.iter().map(|t| t.text.as_str()).collect();
    format!("[{:3} sprites] {}", scene.sprites.len(), hud.join(" | "))
}
