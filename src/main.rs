// lineterp: line-numbered script interpreter with a character screen

use std::fs;
use std::io;

use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use lineterp::display::{ScreenBuffer, Transcript};
use lineterp::interpreter::engine::Interpreter;
use lineterp::parser::parse::Parser;
use lineterp::ui::App;

/// Exit status for unreadable or invalid programs
const EXIT_INVALID: i32 = -1;

struct Options {
    path: String,
    plain: bool,
    dump: bool,
    max_steps: Option<usize>,
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut path = None;
    let mut plain = false;
    let mut dump = false;
    let mut max_steps = None;

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--plain" => plain = true,
            "--dump" => dump = true,
            "--max-steps" => {
                let value = iter
                    .next()
                    .ok_or_else(|| "--max-steps needs a value".to_string())?;
                let limit = value
                    .parse::<usize>()
                    .map_err(|_| format!("invalid step limit '{}'", value))?;
                max_steps = Some(limit);
            }
            flag if flag.starts_with("--") => return Err(format!("unknown option '{}'", flag)),
            file => {
                if path.replace(file.to_string()).is_some() {
                    return Err("only one program file may be given".to_string());
                }
            }
        }
    }

    let path = path.ok_or_else(|| "no input file provided".to_string())?;
    Ok(Options {
        path,
        plain,
        dump,
        max_steps,
    })
}

fn print_usage(program_name: &str) {
    eprintln!("Usage: {} <filename> [--plain] [--dump] [--max-steps N]", program_name);
    eprintln!();
    eprintln!("  --plain          print \"row col text\" lines instead of drawing the screen");
    eprintln!("  --dump           list the parsed commands before running");
    eprintln!("  --max-steps N    stop with an error after N commands");
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("lineterp");

    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("Error: {}", message);
            eprintln!();
            print_usage(program_name);
            std::process::exit(EXIT_INVALID);
        }
    };

    let source = match fs::read_to_string(&options.path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error opening file {}: {}", options.path, e);
            std::process::exit(EXIT_INVALID);
        }
    };

    let program = match Parser::new(&source).parse_program() {
        Ok(program) => program,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("Error: Could not build runtime");
            std::process::exit(EXIT_INVALID);
        }
    };

    if options.dump {
        print!("{}", program);
    }

    let mut interpreter = Interpreter::new(program);
    if let Some(limit) = options.max_steps {
        interpreter = interpreter.with_step_limit(limit);
    }

    if options.plain {
        let mut transcript = Transcript::new();
        let outcome = interpreter.run(&mut transcript);
        for line in transcript.get_output() {
            println!("{}", line);
        }
        if let Err(e) = outcome {
            eprintln!("{}", e);
        }
        return Ok(());
    }

    let mut screen = ScreenBuffer::new();
    let outcome = interpreter.run(&mut screen);

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, Hide)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(screen, outcome, interpreter.steps_taken());
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, Show)?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
