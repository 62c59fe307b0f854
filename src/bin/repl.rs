use genesys_dice::{FnResolver, RollResult};
use std::io::{self, Write};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut line = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;
        line.clear();
        if io::stdin().read_line(&mut line)? == 0 {
            return Ok(());
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        let resolver = FnResolver::new(|name| ask(name), |name| ask(name), |name| ask(name));
        print_result(&genesys_dice::roll(input, resolver), 0);
    }
}

/// Asks the user for the value of a variable, property, or prompt token.
fn ask(token: &str) -> i32 {
    let question = token
        .strip_prefix("${?")
        .and_then(|s| s.strip_suffix('}'))
        .unwrap_or(token);
    loop {
        print!("{}? ", question);
        if io::stdout().flush().is_err() {
            return 1;
        }
        let mut buf = String::new();
        match io::stdin().read_line(&mut buf) {
            Ok(0) | Err(_) => return 1,
            Ok(_) => {
                if let Ok(n) = buf.trim().parse() {
                    return n;
                }
                println!("enter a number");
            }
        }
    }
}

fn print_result(result: &RollResult, depth: usize) {
    let pad = "  ".repeat(depth);
    if result.is_error() {
        for error in result.errors() {
            eprintln!("{}{}", pad, error);
        }
        return;
    }

    println!("{}{} = {}", pad, result.roll_string(), result.tally());
    for roll in result.rolls() {
        println!("{}  {}: {}", pad, roll.die, roll.face);
    }
    let mut names: Vec<_> = result.group_names().collect();
    names.sort_unstable();
    for name in names {
        let group = result.group(name).expect("name came from this result");
        println!("{}[{}]", pad, name);
        print_result(group, depth + 1);
    }
}
