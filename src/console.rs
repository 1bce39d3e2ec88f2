//// # Console front-end
////
//// Drives a [`CltSession`] from line-oriented input, one command per line.
//// Each command maps to one of the session events; after every event that
//// changes the session the caller-provided `redraw` hook receives the new
//// view. Malformed input is reported and otherwise ignored.

use crate::interactive::{CltSession, SessionView};
use anyhow::Result;
use log::warn;
use std::io::{BufRead, Write};
use std::ops::RangeInclusive;

/// Values accepted by the sample size slider.
pub const SLIDER_RANGE: RangeInclusive<usize> = 1..=100;

pub const USAGE: &str = "\
commands:
  s, sample        take one click worth of samples
  x, sample10      take ten clicks worth of samples
  r, reset         clear all the sample means
  n <1..100>       change the sample size (clears the sample means)
  h, help          show this message
  q, quit          exit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Sample,
    SampleTen,
    Reset,
    SetSampleSize(usize),
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> std::result::Result<Self, String> {
        let mut tokens = line.split_whitespace();
        let cmd = tokens.next().unwrap_or("");
        let arg = tokens.next();
        if tokens.next().is_some() {
            return Err(format!("too many arguments in `{}`", line.trim()));
        }
        match (cmd, arg) {
            ("s" | "sample", None) => Ok(Command::Sample),
            ("x" | "sample10", None) => Ok(Command::SampleTen),
            ("r" | "reset", None) => Ok(Command::Reset),
            ("h" | "help", None) => Ok(Command::Help),
            ("q" | "quit", None) => Ok(Command::Quit),
            ("n", Some(value)) => {
                let n: usize = value
                    .parse()
                    .map_err(|_| format!("`{}` is not a sample size", value))?;
                if !SLIDER_RANGE.contains(&n) {
                    return Err(format!(
                        "sample size must be between {} and {}, got {}",
                        SLIDER_RANGE.start(),
                        SLIDER_RANGE.end(),
                        n
                    ));
                }
                Ok(Command::SetSampleSize(n))
            }
            ("n", None) => Err("`n` needs a sample size".to_string()),
            _ => Err(format!("unknown command `{}`, type `h` for help", line.trim())),
        }
    }
}

/// Applies a single command, returning the new view for the commands that
/// change the session.
pub fn dispatch(session: &mut CltSession, command: Command) -> Result<Option<SessionView>> {
    let view = match command {
        Command::Sample => session.sample_click(),
        Command::SampleTen => session.sample_ten_clicks(),
        Command::Reset => session.reset(),
        Command::SetSampleSize(n) => session.set_sample_size(n)?,
        Command::Help | Command::Quit => return Ok(None),
    };
    Ok(Some(view))
}

/// Reads commands until `quit` or the end of the input. `redraw` is called
/// once with the initial view and then after every state change.
pub fn run<R, W, F>(session: &mut CltSession, input: R, mut output: W, mut redraw: F) -> Result<()>
where
    R: BufRead,
    W: Write,
    F: FnMut(&SessionView) -> Result<()>,
{
    redraw(&session.view())?;
    writeln!(output, "{}", USAGE)?;
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(msg) => {
                warn!("Ignoring input: {}", msg);
                writeln!(output, "{}", msg)?;
                continue;
            }
        };
        match command {
            Command::Quit => break,
            Command::Help => writeln!(output, "{}", USAGE)?,
            command => {
                if let Some(view) = dispatch(session, command)? {
                    redraw(&view)?;
                    writeln!(output, "{}", describe(&view))?;
                }
            }
        }
    }
    output.flush()?;
    Ok(())
}

/// One-line textual summary of a view, printed after each event.
pub fn describe(view: &SessionView) -> String {
    match view {
        SessionView::Empty { sample_size, .. } => {
            format!("n = {}: no samples yet", sample_size)
        }
        SessionView::Accumulating(s) => format!(
            "n = {}: {} means, observed {:.4} ± {:.4}, theoretical {:.4} ± {:.4}",
            s.sample_size,
            s.observed.count,
            s.observed.mean,
            s.observed.std_dev,
            s.theoretical.mean(),
            s.theoretical.std_dev()
        ),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::interactive::SessionState;
    use crate::stats::UniformPopulation;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    fn session() -> CltSession {
        CltSession::new(UniformPopulation::default(), 30, 5, 4321).unwrap()
    }

    #[test]
    fn test_parse() {
        assert_eq!(Command::parse("s"), Ok(Command::Sample));
        assert_eq!(Command::parse("  sample10 "), Ok(Command::SampleTen));
        assert_eq!(Command::parse("reset"), Ok(Command::Reset));
        assert_eq!(Command::parse("n 12"), Ok(Command::SetSampleSize(12)));
        assert_eq!(Command::parse("n 100"), Ok(Command::SetSampleSize(100)));
        assert_eq!(Command::parse("q"), Ok(Command::Quit));
        assert!(Command::parse("n 0").is_err());
        assert!(Command::parse("n 101").is_err());
        assert!(Command::parse("n abc").is_err());
        assert!(Command::parse("n").is_err());
        assert!(Command::parse("s 3").is_err());
        assert!(Command::parse("jump").is_err());
    }

    #[test]
    fn test_run_dispatches_events() {
        let mut s = session();
        let input = Cursor::new("s\nx\nbogus\n\nh\nn 7\ns\n");
        let mut output = Vec::new();
        let mut views = Vec::new();
        run(&mut s, input, &mut output, |view| {
            views.push(view.clone());
            Ok(())
        })
        .unwrap();

        // initial view plus one per state-changing command
        let states: Vec<SessionState> = views.iter().map(|v| v.state()).collect();
        assert_eq!(
            states,
            vec![
                SessionState::Empty,
                SessionState::Accumulating,
                SessionState::Accumulating,
                SessionState::Empty,
                SessionState::Accumulating,
            ]
        );
        assert_eq!(s.sample_size(), 7);
        assert_eq!(s.history().len(), 5);

        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("unknown command `bogus`"));
        assert!(output.contains("n = 7: 5 means"));
    }

    #[test]
    fn test_run_stops_at_quit() {
        let mut s = session();
        let input = Cursor::new("s\nq\ns\ns\n");
        let mut redraws = 0;
        run(&mut s, input, Vec::new(), |_| {
            redraws += 1;
            Ok(())
        })
        .unwrap();
        assert_eq!(redraws, 2);
        assert_eq!(s.history().len(), 5);
    }

    #[test]
    fn test_out_of_range_slider_keeps_session() {
        let mut s = session();
        let input = Cursor::new("x\nn 500\n");
        run(&mut s, input, Vec::new(), |_| Ok(())).unwrap();
        assert_eq!(s.sample_size(), 30);
        assert_eq!(s.history().len(), 50);
    }

    #[test]
    fn test_reset_twice() {
        let mut s = session();
        dispatch(&mut s, Command::SampleTen).unwrap();
        let once = dispatch(&mut s, Command::Reset).unwrap();
        let twice = dispatch(&mut s, Command::Reset).unwrap();
        assert_eq!(once, twice);
        assert_eq!(dispatch(&mut s, Command::Help).unwrap(), None);
    }

    #[test]
    fn test_describe_empty() {
        let s = session();
        assert_eq!(describe(&s.view()), "n = 30: no samples yet");
    }
}
