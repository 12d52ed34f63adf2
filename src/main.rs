use crossterm::event::{self, Event};
use dontlook::display_manager::{create_display, DisplayMode};
use dontlook::input::{InputEvent, LineEditor};
use dontlook::interpreter::{Interpreter, Outcome};
use dontlook::world::build_world;
use log::{debug, info};
use std::env;
use std::io::{self, BufRead};

fn print_help(program: &str) {
    println!("dontlook - Don't Look Behind You, a text-command room adventure");
    println!();
    println!("Usage: {} [--display ratatui|terminal|headless]", program);
    println!();
    println!("Type two-word commands (go/look/take/give + a noun); Tab completes");
    println!("against the current room's vocabulary, arrow keys walk the four");
    println!("compass directions, and exit/quit/bye leaves the game.");
    println!();
    println!("Without a terminal (piped input), one command is read per line:");
    println!("  echo \"go north_east\" | {}", program);
    println!();
    println!("The display mode can also be set with the DISPLAY_MODE env var.");
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let mut mode = DisplayMode::from_env();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help(&args[0]);
                return Ok(());
            }
            "--display" => {
                i += 1;
                let name = match args.get(i) {
                    Some(name) => name,
                    None => {
                        eprintln!("Error: --display needs a mode (ratatui, terminal, headless)");
                        std::process::exit(1);
                    }
                };
                match DisplayMode::parse(name) {
                    Some(m) => mode = m,
                    None => {
                        eprintln!("Error: unknown display mode '{}'", name);
                        std::process::exit(1);
                    }
                }
            }
            other => {
                eprintln!("Error: unknown option '{}'", other);
                eprintln!();
                print_help(&args[0]);
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let (world, start) = build_world();
    world.validate().map_err(io::Error::other)?;

    let (display, active_mode) = create_display(mode)?;
    info!("display mode: {:?}", active_mode);

    let mut interpreter = Interpreter::with_display(world, start, display);
    interpreter.start();

    if active_mode == DisplayMode::Ratatui {
        run_interactive(&mut interpreter)?;
    } else {
        run_line_mode(&mut interpreter)?;
    }

    // quitting and end-of-input both leave with status 0
    Ok(())
}

/// Key-event loop for the ratatui shell
fn run_interactive(interpreter: &mut Interpreter) -> io::Result<()> {
    let mut editor = LineEditor::new();

    loop {
        match event::read()? {
            Event::Key(key) => {
                let Some(input_event) = editor.apply_key(key) else {
                    // an ordinary edit; keep the echoed line current
                    interpreter.echo_input(editor.line());
                    continue;
                };
                match input_event {
                    InputEvent::Submitted(line) => {
                        interpreter.echo_input("");
                        if interpreter.execute(&line) == Outcome::Terminate {
                            return Ok(());
                        }
                    }
                    InputEvent::CompletionRequested(partial) => {
                        let completion = interpreter.complete_input(&partial);
                        if completion.replaced {
                            editor.set_line(completion.line);
                        }
                        interpreter.echo_input(editor.line());
                    }
                    InputEvent::Directional(direction) => {
                        let command = format!("go {}", direction);
                        if interpreter.execute(&command) == Outcome::Terminate {
                            return Ok(());
                        }
                    }
                    InputEvent::Cancelled => return Ok(()),
                }
            }
            Event::Resize(width, height) => interpreter.handle_resize(width, height),
            _ => {}
        }
    }
}

/// One command per line from stdin, for pipes and dumb terminals.
///
/// EOF must end the loop: with a pipe as stdin, read_line returns 0 bytes
/// forever once the pipe drains, and without this check the loop would
/// spin on empty input.
fn run_line_mode(interpreter: &mut Interpreter) -> io::Result<()> {
    let stdin = io::stdin();
    let mut buffer = String::new();

    loop {
        buffer.clear();
        let bytes_read = stdin.lock().read_line(&mut buffer)?;
        if bytes_read == 0 {
            debug!("EOF on stdin, leaving");
            return Ok(());
        }

        match interpreter.execute(buffer.trim_end_matches(['\r', '\n'])) {
            Outcome::Terminate => return Ok(()),
            Outcome::Ignored => debug!("game over, input ignored"),
            Outcome::Response(_) => {}
        }
    }
}
