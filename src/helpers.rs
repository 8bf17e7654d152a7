use crate::{reveal::RevealConfig, types::TextSource};

use rand::Rng;
use std::{env, fs, process};

pub const QUOTES: &[&str] = &[
    "Hey! I'm a tiny terminal typewriter — nice to meet you. 🦀",
    "Slow is smooth, smooth is fast.",
    "Every line arrives one glyph at a time, pauses and all.",
    "Ship small things often — the big ones follow.",
    "What the cursor hides, the caret reveals. 🌊",
];

pub fn print_usage_and_exit() -> ! {
    eprintln!(
        "Usage: ttr [-text PATH] [-delay MS] [-start MS] [-no-caret]

Options:
  -text PATH   Reveal the contents of the file at PATH
  -delay MS    Base delay between glyphs in milliseconds (default 24, floor 8)
  -start MS    Delay before the first glyph appears (default 300)
  -no-caret    Hide the blinking caret while revealing
By default, a random built-in quote is revealed."
    );

    process::exit(1);
}

pub fn parse_args() -> (TextSource, RevealConfig) {
    let mut text_path: Option<String> = None;
    let mut config = RevealConfig::default();

    let mut args = env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => print_usage_and_exit(),

            "-t" | "-text" | "--text" => {
                let path = args.next().unwrap_or_else(|| {
                    eprintln!("Missing path after {}", arg);

                    print_usage_and_exit()
                });

                text_path = Some(path);
            }

            "-d" | "-delay" | "--delay" => {
                config.base_delay_ms = parse_ms(&arg, args.next());
            }

            "-s" | "-start" | "--start" => {
                config.start_delay_ms = parse_ms(&arg, args.next());
            }

            "-no-caret" | "--no-caret" => {
                config.caret = false;
            }

            other => {
                eprintln!("Unknown argument: {}", other);

                print_usage_and_exit()
            }
        }
    }

    let source = if let Some(path) = text_path {
        let content = fs::read_to_string(&path).unwrap_or_else(|e| {
            eprintln!("Failed to read text file at {}: {}", path, e);

            process::exit(1);
        });

        let content = content.replace("\r\n", "\n");

        TextSource::Fixed(content.trim_end().to_string())
    } else {
        TextSource::Quotes(QUOTES.iter().map(|s| s.to_string()).collect())
    };

    (source, config)
}

fn parse_ms(flag: &str, value: Option<String>) -> u64 {
    let value = value.unwrap_or_else(|| {
        eprintln!("Missing milliseconds after {}", flag);

        print_usage_and_exit()
    });

    value.parse::<u64>().unwrap_or_else(|_| {
        eprintln!("Invalid milliseconds after {}: {}", flag, value);

        print_usage_and_exit()
    })
}

pub fn pick_text(source: &TextSource) -> String {
    match source {
        TextSource::Fixed(text) => text.clone(),
        TextSource::Quotes(quotes) => {
            let mut rng = rand::rng();
            let index = rng.random_range(0..quotes.len());

            quotes[index].clone()
        }
    }
}
