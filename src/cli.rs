use crate::element::{
    sort_elements, CustomElement, CustomValue, DynCompare, Element, ElementOps, ElementType,
    TryCoercibleInto, NA_MARKER,
};
use crate::error::Error;

#[derive(Debug, Clone, clap::Parser)]
#[command(name = "series", about = "Sort a column of elements and print it")]
pub struct Cli {
    /// Kind of element to build from each value
    #[arg(short, long, default_value_t = ElementType::Custom)]
    pub kind: ElementType,

    #[arg(short, long)]
    pub descending: bool,

    /// Comma separated values, `NaN` for a missing value
    #[arg(value_delimiter = ',')]
    pub values: Vec<String>,
}

/// Payload used for `--kind custom`, ranked by the integer it was parsed from.
#[derive(Debug, Clone, PartialEq)]
pub struct Priority {
    text: String,
    rank: i64,
}

impl CustomValue for Priority {
    fn render(&self) -> String {
        self.text.clone()
    }

    fn rank(&self) -> i64 {
        self.rank
    }

    fn value(&self) -> &dyn DynCompare {
        &self.text
    }
}

pub fn parse_element(kind: ElementType, raw: &str) -> Result<Element, Error> {
    let raw = raw.trim();
    if raw == NA_MARKER {
        return Ok(Element::na(kind));
    }

    match kind {
        ElementType::String => Ok(Element::from(raw)),
        ElementType::Int => Ok(Element::from(TryCoercibleInto::<i64>::try_coerce_into(raw)?)),
        ElementType::Float => Ok(Element::from(TryCoercibleInto::<f64>::try_coerce_into(raw)?)),
        ElementType::Bool => Ok(Element::from(TryCoercibleInto::<bool>::try_coerce_into(raw)?)),
        ElementType::Custom => {
            let rank = TryCoercibleInto::<i64>::try_coerce_into(raw)
                .map_err(|_| Error::CannotBeCoercedTo("custom"))?;
            let text = raw.to_string();
            Ok(Element::Custom(CustomElement::new(Priority { text, rank })))
        }
    }
}

/// Build, sort and render the column described by `cli`.
pub fn run(cli: &Cli) -> Result<Vec<String>, Error> {
    let mut column = cli
        .values
        .iter()
        .map(|raw| parse_element(cli.kind, raw))
        .collect::<Result<Vec<_>, _>>()?;

    let missing = column.iter().filter(|x| x.is_na()).count();
    tracing::debug!(
        kind = %cli.kind,
        len = column.len(),
        missing,
        descending = cli.descending,
        "sorting column"
    );

    sort_elements(&mut column, cli.descending);
    Ok(column.iter().map(|x| x.render()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("series").chain(args.iter().copied()))
    }

    #[test]
    fn sorts_custom_by_rank() {
        let out = run(&cli(&["3,1,NaN,2"]));
        assert_eq!(
            out,
            Ok(vec!["1", "2", "3", "NaN"].into_iter().map(String::from).collect())
        );
    }

    #[test]
    fn sorts_descending_with_kind() {
        let out = run(&cli(&["--kind", "float", "--descending", "1.5,NaN,-2,10"]));
        assert_eq!(
            out,
            Ok(vec!["10", "1.5", "-2", "NaN"].into_iter().map(String::from).collect())
        );
    }

    #[test]
    fn strings_sort_lexically() {
        let out = run(&cli(&["-k", "string", "b,a,c"]));
        assert_eq!(out, Ok(vec!["a", "b", "c"].into_iter().map(String::from).collect()));
    }

    #[test]
    fn bad_values_are_reported() {
        assert_eq!(
            run(&cli(&["-k", "int", "1,x"])),
            Err(Error::CannotBeCoercedTo("int"))
        );
        assert_eq!(run(&cli(&["1,high"])), Err(Error::CannotBeCoercedTo("custom")));
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let parsed = Cli::try_parse_from(["series", "--kind", "complex", "1"]);
        assert!(parsed.is_err());
    }
}
