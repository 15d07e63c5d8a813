/*! Reading of transformed tagger files

Sentences are yielded as [Vec<Token>]. The layout depends on the [OutputFormat]:

- [OutputFormat::Pairs]: one `word tag` pair per line, a line with less than two space separated parts ends a sentence.
- [OutputFormat::Inline]: one sentence per line, `word_tag` tokens separated by spaces.
!*/
use std::{
    fs::File,
    io::{BufRead, BufReader, Lines, Read},
    path::Path,
};

use log::warn;

use crate::{error::Error, io::writer::OutputFormat, types::Token};

#[derive(Debug)]
pub struct TaggedReader<T> {
    lines: Lines<BufReader<T>>,
    format: OutputFormat,
}

impl TaggedReader<File> {
    pub fn from_path(src: &Path, format: OutputFormat) -> Result<Self, Error> {
        Ok(Self::new(File::open(src)?, format))
    }
}

impl<T: Read> TaggedReader<T> {
    pub fn new(inner: T, format: OutputFormat) -> Self {
        Self {
            lines: BufReader::new(inner).lines(),
            format,
        }
    }

    /// Group pair lines until a boundary line.
    fn next_pairs(&mut self) -> Option<Result<Vec<Token>, Error>> {
        let mut ret = Vec::new();
        for line in self.lines.by_ref() {
            let line = match line {
                Ok(line) => line,
                Err(e) => return Some(Err(Error::Io(e))),
            };
            let mut parts = line.split(' ');
            match (parts.next(), parts.next()) {
                (Some(word), Some(tag)) => ret.push(Token::new(word, tag)),
                _ => return Some(Ok(ret)),
            }
        }

        // close eventual last sentence
        if !ret.is_empty() {
            Some(Ok(ret))
        } else {
            None
        }
    }

    fn next_inline(&mut self) -> Option<Result<Vec<Token>, Error>> {
        let line = match self.lines.next()? {
            Ok(line) => line,
            Err(e) => return Some(Err(Error::Io(e))),
        };

        let tokens = line
            .split(' ')
            .filter(|t| !t.is_empty())
            .filter_map(|t| match t.rsplit_once('_') {
                Some((word, tag)) => Some(Token::new(word, tag)),
                None => {
                    warn!("skipping untagged token {:?}", t);
                    None
                }
            })
            .collect();
        Some(Ok(tokens))
    }
}

impl<T: Read> Iterator for TaggedReader<T> {
    type Item = Result<Vec<Token>, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.format {
            OutputFormat::Pairs => self.next_pairs(),
            OutputFormat::Inline => self.next_inline(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn pairs() {
        let text = Cursor::new("le DET\nchat N\n\nil Pron\n\n");
        let r = TaggedReader::new(text, OutputFormat::Pairs);
        let res: Vec<Vec<Token>> = r.map(|s| s.unwrap()).collect();
        assert_eq!(
            res,
            vec![
                vec![Token::new("le", "DET"), Token::new("chat", "N")],
                vec![Token::new("il", "Pron")],
            ]
        );
    }

    #[test]
    fn pairs_unterminated() {
        let text = Cursor::new("le DET\nchat N");
        let r = TaggedReader::new(text, OutputFormat::Pairs);
        let res: Vec<Vec<Token>> = r.map(|s| s.unwrap()).collect();
        assert_eq!(res.len(), 1);
        assert_eq!(res[0].len(), 2);
    }

    #[test]
    fn pairs_empty_sentence() {
        let text = Cursor::new("a N\n\n\nb V\n\n");
        let r = TaggedReader::new(text, OutputFormat::Pairs);
        let res: Vec<Vec<Token>> = r.map(|s| s.unwrap()).collect();
        assert_eq!(res.len(), 3);
        assert!(res[1].is_empty());
    }

    #[test]
    fn inline() {
        let text = Cursor::new("le_DET chat_N\nmulti_part_word_N nope\n");
        let r = TaggedReader::new(text, OutputFormat::Inline);
        let res: Vec<Vec<Token>> = r.map(|s| s.unwrap()).collect();
        assert_eq!(
            res,
            vec![
                vec![Token::new("le", "DET"), Token::new("chat", "N")],
                vec![Token::new("multi_part_word", "N")],
            ]
        );
    }
}
