//! List command implementation.
//!
//! Prints the named colours of the active table.

use clap::Args;

use crate::error::Result;
use crate::output::{plural, Printer};
use crate::registry::ColourTable;

/// List named colours
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only list names containing this text
    #[arg(long, short)]
    pub filter: Option<String>,

    /// Only list colours that are not built in
    #[arg(long)]
    pub custom: bool,
}

pub fn run(args: ListArgs, table: &ColourTable, printer: &Printer) -> Result<()> {
    let names = matching_names(table, &args);

    for name in &names {
        let colour = table.resolve(*name);
        println!(
            "{}{:<22} {}",
            printer.swatch(&colour),
            name,
            printer.dim(table.get(name).unwrap_or_default())
        );
    }

    printer.info("Listed", &plural(names.len(), "colour", "colours"));
    Ok(())
}

/// Sorted names selected by the list options.
pub fn matching_names<'a>(table: &'a ColourTable, args: &ListArgs) -> Vec<&'a str> {
    let filter = args.filter.as_deref().map(str::to_lowercase);

    table
        .names()
        .into_iter()
        .filter(|name| !args.custom || !ColourTable::is_builtin_name(name))
        .filter(|name| {
            filter
                .as_ref()
                .map_or(true, |f| name.to_lowercase().contains(f.as_str()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(filter: Option<&str>, custom: bool) -> ListArgs {
        ListArgs {
            filter: filter.map(String::from),
            custom,
        }
    }

    #[test]
    fn test_filter() {
        let table = ColourTable::builtin();
        let names = matching_names(&table, &args(Some("SEAGREEN"), false));
        assert_eq!(
            names,
            vec!["darkseagreen", "lightseagreen", "mediumseagreen", "seagreen"]
        );
    }

    #[test]
    fn test_custom_only() {
        let table = ColourTable::with_overrides([("brand", "#FF00FF"), ("red", "#AA0000")]);
        assert_eq!(matching_names(&table, &args(None, true)), vec!["brand"]);
        assert_eq!(matching_names(&table, &args(None, false)).len(), 149);
    }
}
