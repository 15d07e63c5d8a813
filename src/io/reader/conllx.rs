//! Line oriented reader of tab separated annotated corpora.
use std::{
    fs::File,
    io::{BufRead, BufReader, Lines, Read},
    path::{Path, PathBuf},
};

use crate::{error::Error, types::InputLine};

/// Reader that yields each line of a corpus along with its 0-based index.
///
/// Line terminators (`\n` or `\r\n`) are stripped before classification.
#[derive(Debug)]
pub struct ConllxReader<T> {
    path: PathBuf,
    lines: Lines<BufReader<T>>,
    index: u64,
}

impl ConllxReader<File> {
    pub fn from_path(src: &Path) -> Result<Self, Error> {
        let handler = File::open(src)?;
        Ok(Self {
            path: src.to_path_buf(),
            lines: BufReader::new(handler).lines(),
            index: 0,
        })
    }
}

impl<T: Read> ConllxReader<T> {
    /// Wrap an already opened source. `path` is only kept for reporting.
    pub fn new(inner: T, path: PathBuf) -> Self {
        Self {
            path,
            lines: BufReader::new(inner).lines(),
            index: 0,
        }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl<T: Read> Iterator for ConllxReader<T> {
    type Item = Result<(u64, InputLine), Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = match self.lines.next()? {
            Ok(line) => line,
            Err(e) => return Some(Err(Error::Io(e))),
        };

        let index = self.index;
        self.index += 1;
        Some(Ok((index, InputLine::parse(index, &line))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{MalformedRecord, Token};
    use std::io::Cursor;

    #[test]
    fn test_iter() {
        let corpus = Cursor::new(
            "<doc>
1\tLe\tle\t_\tDET\t_
2\tchat\tchat\t_\tN\t_
broken
<doc>",
        );

        let expected = vec![
            (0, InputLine::Markup),
            (1, InputLine::Record(Token::new("Le", "DET"))),
            (2, InputLine::Record(Token::new("chat", "N"))),
            (3, InputLine::Malformed(MalformedRecord::new(3, "broken"))),
            (4, InputLine::Markup),
        ];

        let reader = ConllxReader::new(corpus, PathBuf::new());
        let res: Vec<(u64, InputLine)> = reader.map(|r| r.unwrap()).collect();
        assert_eq!(res, expected);
    }

    #[test]
    fn test_crlf() {
        let corpus = Cursor::new("<s>\r\n1\tkissa\tkissa\tN\tN\r\n");
        let reader = ConllxReader::new(corpus, PathBuf::new());
        let res: Vec<InputLine> = reader.map(|r| r.unwrap().1).collect();
        assert_eq!(
            res,
            vec![InputLine::Markup, InputLine::Record(Token::new("kissa", "N"))]
        );
    }

    #[test]
    fn missing_file() {
        let r = ConllxReader::from_path(Path::new("svdkjljlkmjlmdsfljkf.conllx"));
        assert!(matches!(r, Err(Error::Io(_))));
    }
}
