/// Descriptions longer than this are always printed over multiple lines.
const MAX_SINGLE_LINE_DESCRIPTION_LEN: usize = 70;

/// Prints `description` as a block string followed by a newline, with every
/// line indented by `indentation`. Descriptions of indented items that are not
/// first in their block are preceded by a blank line.
pub(in crate::printer) fn print_description(
    description: Option<&str>,
    indentation: &str,
    first_in_block: bool,
) -> String {
    let Some(description) = description else {
        return String::new();
    };

    let prefer_multiple_lines =
        description.chars().count() > MAX_SINGLE_LINE_DESCRIPTION_LEN;
    let block_string = print_block_string(description, prefer_multiple_lines);
    let prefix =
        if !indentation.is_empty() && !first_in_block {
            format!("\n{indentation}")
        } else {
            indentation.to_string()
        };

    format!(
        "{prefix}{}\n",
        block_string.replace('\n', &format!("\n{indentation}")),
    )
}

fn print_block_string(value: &str, prefer_multiple_lines: bool) -> String {
    let is_single_line = !value.contains('\n');
    let has_leading_space = value.starts_with([' ', '\t']);
    let print_as_multiple_lines =
        !is_single_line
            || value.ends_with('"')
            || value.ends_with('\\')
            || prefer_multiple_lines;

    let mut result = String::new();
    // A single line with leading whitespace can't start on its own line
    // without that whitespace being read back as indentation.
    if print_as_multiple_lines && !(is_single_line && has_leading_space) {
        result.push('\n');
    }
    result.push_str(value);
    if print_as_multiple_lines {
        result.push('\n');
    }

    format!("\"\"\"{}\"\"\"", result.replace("\"\"\"", "\\\"\"\""))
}
