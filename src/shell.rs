//! Interactive read-eval loop: search, rate, quit.

use std::io::{self, BufRead, Write};

use tracing::{debug, warn};

use crate::catalog::Catalog;
use crate::index::{InvertedIndex, Searcher};
use crate::types::identifiers::MediaId;
use crate::types::listing::Query;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Search,
    Rate,
    Quit,
}

impl Command {
    fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        if input.eq_ignore_ascii_case("search") {
            Some(Command::Search)
        } else if input.eq_ignore_ascii_case("rate") {
            Some(Command::Rate)
        } else if input.eq_ignore_ascii_case("quit") {
            Some(Command::Quit)
        } else {
            None
        }
    }
}

/// Drives one session over any line source and sink.
///
/// The index is borrowed for the whole session; the catalog is borrowed
/// mutably because `rate` changes it. End of input behaves like `quit`.
pub struct Shell<'a, R, W> {
    catalog: &'a mut Catalog,
    index: &'a InvertedIndex,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(catalog: &'a mut Catalog, index: &'a InvertedIndex, input: R, output: W) -> Self {
        Self {
            catalog,
            index,
            input,
            output,
        }
    }

    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "Welcome to the Search Engine!")?;
        loop {
            writeln!(self.output, "What would you like to do? [Search, Rate, Quit]")?;
            let Some(line) = self.prompt()? else {
                break;
            };
            match Command::parse(&line) {
                Some(Command::Search) => self.search()?,
                Some(Command::Rate) => self.rate()?,
                Some(Command::Quit) => break,
                None => writeln!(self.output, "Invalid command, please try again.")?,
            }
        }
        writeln!(self.output, "See you next time!")?;
        self.output.flush()
    }

    fn search(&mut self) -> io::Result<()> {
        writeln!(self.output, "Enter query:")?;
        let Some(raw) = self.prompt()? else {
            return Ok(());
        };

        let result = Searcher::new(self.catalog, self.index).search(Query::new(raw));
        debug!(
            query = %result.search.query,
            matched = result.search.documents_matched,
            "search"
        );

        if result.is_empty() {
            writeln!(self.output, "\tNo results!")?;
        }
        for doc in &result.documents {
            writeln!(self.output, "\t{}", doc.display)?;
        }
        Ok(())
    }

    fn rate(&mut self) -> io::Result<()> {
        for item in self.catalog.listing() {
            writeln!(self.output, "\t{}: {}", item.id, item.display)?;
        }
        writeln!(self.output, "What would you like to rate (enter index)?")?;
        let Some(choice) = self.prompt_number::<i64>()? else {
            return Ok(());
        };
        // Any number that is not a listed id, negative ones included.
        let known = u32::try_from(choice)
            .ok()
            .map(MediaId::new)
            .and_then(|id| self.catalog.get(id).map(|m| (id, m.title().to_string())));
        let Some((id, title)) = known else {
            writeln!(self.output, "Invalid choice")?;
            return Ok(());
        };

        writeln!(self.output, "Rating [{title}]")?;
        writeln!(self.output, "What rating would you give?")?;
        let Some(score) = self.prompt_number::<i32>()? else {
            return Ok(());
        };

        match self.catalog.rate(id, score) {
            Ok(()) => debug!(%id, score, "rating added"),
            Err(e) => {
                warn!(%id, score, error = %e, "rating rejected");
                writeln!(self.output, "{e}")?;
            }
        }
        Ok(())
    }

    /// Print the prompt marker and read one line. `None` at end of input.
    fn prompt(&mut self) -> io::Result<Option<String>> {
        write!(self.output, "> ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// `None` at end of input or when the line is not a number; the latter is
    /// reported to the user.
    fn prompt_number<T: std::str::FromStr>(&mut self) -> io::Result<Option<T>> {
        let Some(line) = self.prompt()? else {
            return Ok(None);
        };
        match line.trim().parse() {
            Ok(n) => Ok(Some(n)),
            Err(_) => {
                writeln!(self.output, "Invalid number")?;
                Ok(None)
            }
        }
    }
}
