// Entry point: program main
// Handles --help and runs the TUI
//
// TUI Docs: https://github.com/whit3rabbit/bubbletea-rs look for related crates there and examples on each of them.

use std::env;
use std::process;

use namepicker::ui::{self, Model as UiModel, Msg};

use bubbletea_rs::{command::Cmd, event::KeyMsg, model::Model as TeaModel, Program};
use crossterm::event::{KeyCode, KeyModifiers};

// Adapter type implementing bubbletea-rs Model trait by delegating to our UiModel
struct TeaAdapter {
    inner: UiModel,
}

impl TeaAdapter {
    fn apply(&mut self, msg: Msg) {
        self.inner = ui::handle_update(self.inner.clone(), msg);
    }
}

impl TeaModel for TeaAdapter {
    fn init() -> (Self, Option<Cmd>) {
        (TeaAdapter { inner: UiModel::new() }, None)
    }

    fn update(&mut self, msg: bubbletea_rs::event::Msg) -> Option<Cmd> {
        // Map bubbletea-rs Msg types to our ui::Msg and call update
        if let Some(km) = msg.downcast_ref::<KeyMsg>() {
            // Normalize and handle global quit keys first for reliability across terminals:
            match &km.key {
                KeyCode::Esc => {
                    return Some(bubbletea_rs::quit());
                }
                KeyCode::Char(ch) => {
                    if *ch == '\u{1b}' {
                        return Some(bubbletea_rs::quit());
                    }
                    if *ch == '\u{03}' {
                        // Ctrl-C delivered as ETX
                        return Some(bubbletea_rs::quit());
                    }
                    if km.modifiers.contains(KeyModifiers::CONTROL) && (*ch == 'c' || *ch == 'C') {
                        return Some(bubbletea_rs::quit());
                    }
                }
                _ => {}
            }

            match &km.key {
                KeyCode::Enter => {
                    self.apply(Msg::KeyEnter);
                }
                KeyCode::Backspace => {
                    self.apply(Msg::KeyBackspace);
                }
                KeyCode::Esc => { /* handled above */ }
                KeyCode::Up => {
                    self.apply(Msg::KeyUp);
                }
                KeyCode::Down => {
                    self.apply(Msg::KeyDown);
                }
                KeyCode::Char(ch) => {
                    if km.modifiers.contains(KeyModifiers::CONTROL) {
                        match ch {
                            'n' | 'N' => {
                                self.apply(Msg::KeyDown);
                            }
                            'p' | 'P' => {
                                self.apply(Msg::KeyUp);
                            }
                            _ => {}
                        }
                    } else if *ch == 'q' && !self.inner.capture_active() {
                        // q quits only when no capture buffer collects text
                        return Some(bubbletea_rs::quit());
                    } else {
                        self.apply(Msg::Rune(*ch));
                    }
                }
                _ => { /* ignore other keys */ }
            }

            return None;
        }
        None
    }

    fn view(&self) -> String {
        // delegate to the styled renderer
        ui::view(&self.inner)
    }
}

fn print_help() {
    println!("namepicker - interactive random name picker");
    println!();
    println!("Usage:");
    println!("  namepicker");
    println!();
    println!("Options:");
    println!("  --help           Show this help message.");
    println!();
    println!("Keys:");
    println!("  up/k, down/j     Move the cursor.");
    println!("  enter            Confirm the highlighted choice / toggle a name.");
    println!("  r                Shuffle the name list (outside text prompts).");
    println!("  q, esc, ctrl-c   Quit.");
}

#[tokio::main]
async fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        return;
    }

    // Run interactive program
    let builder = Program::<TeaAdapter>::builder().signal_handler(true);
    let program = match builder.build() {
        Ok(p) => p,
        Err(e) => {
            eprintln!("failed to build program: {e:?}");
            process::exit(1);
        }
    };
    match program.run().await {
        Ok(_final_model) => {
            process::exit(0);
        }
        Err(e) => {
            eprintln!("Error: {e:?}");
            process::exit(1);
        }
    }
}
