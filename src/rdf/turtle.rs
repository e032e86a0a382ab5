//! Turtle serialization of the statement set

use super::term::{Iri, Literal, Object, Statement};
use rio_api::formatter::TriplesFormatter;
use rio_api::parser::TriplesParser;
use rio_turtle::{TurtleFormatter, TurtleParser};
use std::io::{BufReader, Cursor};
use thiserror::Error;

/// Parse errors
#[derive(Error, Debug)]
pub enum ParseError {
    /// Turtle syntax error
    #[error("Turtle syntax error: {0}")]
    Syntax(String),

    /// Term kind the statement model does not represent
    #[error("Unsupported term: {0}")]
    UnsupportedTerm(String),
}

pub type ParseResult<T> = Result<T, ParseError>;

impl From<rio_turtle::TurtleError> for ParseError {
    fn from(e: rio_turtle::TurtleError) -> Self {
        ParseError::Syntax(e.to_string())
    }
}

/// Serialize errors
#[derive(Error, Debug)]
pub enum SerializeError {
    /// Formatter failure
    #[error("Turtle serialize error: {0}")]
    Format(String),
}

pub type SerializeResult<T> = Result<T, SerializeError>;

impl From<std::io::Error> for SerializeError {
    fn from(e: std::io::Error) -> Self {
        SerializeError::Format(e.to_string())
    }
}

/// Parse a Turtle document into statements
pub fn parse(input: &str) -> ParseResult<Vec<Statement>> {
    let reader = BufReader::new(Cursor::new(input));
    let mut parser = TurtleParser::new(reader, None);

    let mut statements = Vec::new();
    parser.parse_all(&mut |t| -> Result<(), ParseError> {
        let subject = convert_subject(t.subject)?;
        let predicate = convert_predicate(t.predicate)?;
        let object = convert_object(t.object)?;
        statements.push(Statement::new(subject, predicate, object));
        Ok(())
    })?;

    Ok(statements)
}

/// Serialize statements to a Turtle document
pub fn serialize<'a>(statements: impl IntoIterator<Item = &'a Statement>) -> SerializeResult<String> {
    let mut formatter = TurtleFormatter::new(Vec::new());

    for statement in statements {
        let subject = rio_api::model::Subject::NamedNode(rio_api::model::NamedNode {
            iri: statement.subject.as_str(),
        });
        let predicate = rio_api::model::NamedNode {
            iri: statement.predicate.as_str(),
        };
        let dt_iri;
        let object = match &statement.object {
            Object::Iri(iri) => {
                rio_api::model::Term::NamedNode(rio_api::model::NamedNode { iri: iri.as_str() })
            }
            Object::Literal(lit) => {
                if let Some(language) = lit.language() {
                    rio_api::model::Term::Literal(rio_api::model::Literal::LanguageTaggedString {
                        value: lit.value(),
                        language,
                    })
                } else if lit.is_plain() {
                    rio_api::model::Term::Literal(rio_api::model::Literal::Simple {
                        value: lit.value(),
                    })
                } else {
                    dt_iri = lit.datatype();
                    rio_api::model::Term::Literal(rio_api::model::Literal::Typed {
                        value: lit.value(),
                        datatype: rio_api::model::NamedNode {
                            iri: dt_iri.as_str(),
                        },
                    })
                }
            }
        };

        formatter.format(&rio_api::model::Triple {
            subject,
            predicate,
            object,
        })?;
    }

    let output = formatter.finish()?;
    String::from_utf8(output).map_err(|e| SerializeError::Format(e.to_string()))
}

fn convert_subject(s: rio_api::model::Subject) -> ParseResult<Iri> {
    match s {
        rio_api::model::Subject::NamedNode(n) => {
            Iri::new(n.iri).map_err(|e| ParseError::Syntax(e.to_string()))
        }
        other => Err(ParseError::UnsupportedTerm(other.to_string())),
    }
}

fn convert_predicate(p: rio_api::model::NamedNode) -> ParseResult<Iri> {
    Iri::new(p.iri).map_err(|e| ParseError::Syntax(e.to_string()))
}

fn convert_object(o: rio_api::model::Term) -> ParseResult<Object> {
    match o {
        rio_api::model::Term::NamedNode(n) => Ok(Object::Iri(
            Iri::new(n.iri).map_err(|e| ParseError::Syntax(e.to_string()))?,
        )),
        rio_api::model::Term::Literal(l) => match l {
            rio_api::model::Literal::Simple { value } => Ok(Literal::simple(value).into()),
            rio_api::model::Literal::LanguageTaggedString { value, language } => Ok(
                Literal::language_tagged(value, language)
                    .map_err(|e| ParseError::Syntax(e.to_string()))?
                    .into(),
            ),
            rio_api::model::Literal::Typed { value, datatype } => {
                let dt = Iri::new(datatype.iri).map_err(|e| ParseError::Syntax(e.to_string()))?;
                Ok(Literal::typed(value, dt).into())
            }
        },
        other => Err(ParseError::UnsupportedTerm(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_prefixed_document() {
        let input = r#"
            @prefix : <http://heritage.jakarta.go.id/resource/> .
            @prefix dbo: <http://dbpedia.org/ontology/> .
            @prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .

            :Kota_Tua a dbo:HistoricBuilding ;
                rdfs:comment "The old town of Jakarta" .
        "#;

        let statements = parse(input).unwrap();
        assert_eq!(statements.len(), 2);
        assert_eq!(
            statements[0].subject.as_str(),
            "http://heritage.jakarta.go.id/resource/Kota_Tua"
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse("this is not turtle").is_err());
    }

    #[test]
    fn test_roundtrip() {
        let input = r#"<http://heritage.jakarta.go.id/resource/Monas> <http://www.w3.org/2000/01/rdf-schema#comment> "The national monument"@en ."#;
        let statements = parse(input).unwrap();
        assert_eq!(statements.len(), 1);

        let output = serialize(&statements).unwrap();
        let reparsed = parse(&output).unwrap();
        assert_eq!(statements, reparsed);
    }
}
