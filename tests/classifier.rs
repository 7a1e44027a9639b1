// SPDX-FileCopyrightText: 2025 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

#[cfg(test)]
use pretty_assertions::assert_eq;
use indent_rainbow::{
    Classifier, ConfigurationError, IndentLabel, LineStream, StreamCursor, TabWidth,
};

/// Feeds `line` to `classifier` the way an editor host does,
/// one call per character until the stream reports the line end.
fn classify_line(
    classifier: &mut Classifier,
    line: &str,
    tab_width: TabWidth,
) -> Vec<Option<&'static str>> {
    let mut stream = LineStream::new(line);
    let mut results = vec![];
    while !stream.at_line_end() {
        results.push(classifier.classify(&mut stream, tab_width).map(IndentLabel::name));
    }
    results
}

fn classify_lines(lines: &[&str], tab_width: TabWidth) -> Vec<Vec<Option<&'static str>>> {
    let mut classifier = Classifier::new();
    lines
        .iter()
        .map(|line| classify_line(&mut classifier, line, tab_width))
        .collect()
}

fn width(width: i64) -> TabWidth {
    TabWidth::new(width).unwrap()
}

fn repeated(label: &'static str, times: usize) -> Vec<Option<&'static str>> {
    vec![Some(label); times]
}

#[test]
fn test_all_tabs_cycle_for_every_width() {
    for tab_width in 1..=8 {
        for len in 0..=10 {
            let line = "\t".repeat(len);
            let expected: Vec<Option<&str>> = (0..len)
                .map(|idx| Some(["tab1", "tab2", "tab3", "tab4"][idx % 4]))
                .collect();
            assert_eq!(
                classify_lines(&[line.as_str()], width(tab_width)),
                vec![expected],
                "tab width {tab_width}, {len} tabs"
            );
        }
    }
}

#[test]
fn test_spaces_grouped_by_tab_width_4() {
    let expected = [
        repeated("space1", 4),
        repeated("space2", 4),
        repeated("space3", 4),
    ]
    .concat();
    assert_eq!(classify_lines(&[" ".repeat(12).as_str()], width(4)), vec![expected]);
}

#[test]
fn test_spaces_grouped_by_tab_width_2() {
    let expected = [
        repeated("space1", 2),
        repeated("space2", 2),
        repeated("space3", 2),
        repeated("space4", 2),
    ]
    .concat();
    assert_eq!(classify_lines(&[" ".repeat(8).as_str()], width(2)), vec![expected]);
}

#[test]
fn test_spaces_wrap_after_fourth_level() {
    let expected = [
        repeated("space1", 1),
        repeated("space2", 1),
        repeated("space3", 1),
        repeated("space4", 1),
        repeated("space1", 1),
        repeated("space2", 1),
    ]
    .concat();
    assert_eq!(classify_lines(&["      "], width(1)), vec![expected]);
}

#[test]
fn test_mixed_tab_spaces_tab() {
    assert_eq!(
        classify_lines(&["\t  \t"], width(4)),
        vec![vec![
            Some("tab1"),
            Some("space1"),
            Some("space1"),
            Some("tab2")
        ]]
    );
}

#[test]
fn test_spaces_after_tabs_align_to_line_columns() {
    // The spaces start at column 3, which is no tab boundary;
    // the first group is thus only one space wide.
    let expected = [
        vec![Some("tab1"), Some("tab2"), Some("tab3")],
        repeated("space3", 1),
        repeated("space4", 4),
        repeated("space1", 1),
    ]
    .concat();
    assert_eq!(classify_lines(&["\t\t\t      "], width(4)), vec![expected]);
}

#[test]
fn test_counter_shared_across_tabs_and_spaces() {
    let expected = [
        vec![
            Some("tab1"),
            Some("tab2"),
            Some("tab3"),
            Some("tab4"),
            Some("tab1"),
        ],
        // the first space sits on column 5, a boundary for a width of 5
        repeated("space2", 5),
        vec![None],
    ]
    .concat();
    assert_eq!(classify_lines(&["\t\t\t\t\t     x"], width(5)), vec![expected]);
}

#[test]
fn test_content_ends_classification() {
    let mut classifier = Classifier::new();
    let mut stream = LineStream::new("  \tlet x = 1;\t ");
    let tab_width = width(4);
    let mut results = vec![];
    while !stream.at_line_end() {
        results.push(classifier.classify(&mut stream, tab_width));
    }
    // three whitespace characters, then exactly one call for the content
    assert_eq!(results.len(), 4);
    assert_eq!(results.last(), Some(&None));
    assert_eq!(stream.remaining(), "");
    assert_eq!(classifier.depth(), 0);
}

#[test]
fn test_empty_line_then_tabs() {
    assert_eq!(
        classify_lines(&["", "\t\tx"], width(4)),
        vec![vec![], vec![Some("tab1"), Some("tab2"), None]]
    );
}

#[test]
fn test_next_line_independent_of_previous_line_end() {
    let line_b = "\t  \t    x";
    let expected = classify_lines(&[line_b], width(4));
    for line_a in ["\t\t\t", "      ", "\t \t  ", "\t\tfoo", "", "  x", "\t\t\t\t\t"] {
        assert_eq!(
            classify_lines(&[line_a, line_b], width(4)).pop(),
            expected.first().cloned(),
            "after line {line_a:?}"
        );
    }
}

#[test]
fn test_reset_is_deferred_to_next_line() {
    let mut classifier = Classifier::new();
    classify_line(&mut classifier, "\t\t", width(4));
    assert!(classifier.is_reset_pending());
    assert_eq!(classifier.depth(), 2);

    let mut stream = LineStream::new("\tx");
    assert_eq!(
        classifier.classify(&mut stream, width(4)),
        Some(IndentLabel::Tab(indent_rainbow::IndentLevel::One))
    );
    assert!(!classifier.is_reset_pending());
    assert_eq!(classifier.depth(), 1);
}

#[test]
fn test_explicit_reset() {
    let mut classifier = Classifier::new();
    classify_line(&mut classifier, "\t\t\t", width(4));
    classifier.reset();
    assert_eq!(classifier.depth(), 0);
    assert!(!classifier.is_reset_pending());
    assert_eq!(
        classify_line(&mut classifier, "\tx", width(4)),
        vec![Some("tab1"), None]
    );
}

#[test]
fn test_reset_within_line_opens_a_level() {
    let mut classifier = Classifier::new();
    let mut stream = LineStream::new("        ");
    assert_eq!(
        classifier.classify(&mut stream, width(4)).map(IndentLabel::name),
        Some("space1")
    );
    classifier.reset();
    let mut rest = vec![];
    while !stream.at_line_end() {
        rest.push(classifier.classify(&mut stream, width(4)).map(IndentLabel::name));
    }
    let mut expected = repeated("space1", 3);
    expected.extend(repeated("space2", 4));
    assert_eq!(rest, expected);
}

/// Same rules as the classifier,
/// but resetting the moment a line starts,
/// instead of on the first call after a line ended.
fn classify_eagerly(lines: &[&str], tab_width: TabWidth) -> Vec<Vec<Option<&'static str>>> {
    let advance = |depth: &mut usize| {
        if *depth == 4 {
            *depth = 0;
        }
        *depth += 1;
    };
    lines
        .iter()
        .map(|line| {
            let mut depth = 0;
            let mut labels = vec![];
            for (column, chr) in line.chars().enumerate() {
                match chr {
                    '\t' => {
                        advance(&mut depth);
                        labels.push(Some(["tab1", "tab2", "tab3", "tab4"][depth - 1]));
                    }
                    ' ' => {
                        if column % tab_width.get() == 0 {
                            advance(&mut depth);
                        }
                        labels.push(Some(["space1", "space2", "space3", "space4"][depth - 1]));
                    }
                    _ => {
                        labels.push(None);
                        break;
                    }
                }
            }
            labels
        })
        .collect()
}

#[test]
fn test_deferred_reset_equals_eager_reset() {
    let lines = [
        "\t\t\t\t\t",
        "",
        "    ",
        "\t  \t",
        "",
        "",
        "        foo",
        "\t\t\t      ",
        "  \t  \t  ",
        "bar",
        "\t",
        " ",
        "\t\t\t\t\t\t\t\t\t      baz",
    ];
    for tab_width in 1..=5 {
        assert_eq!(
            classify_lines(&lines, width(tab_width)),
            classify_eagerly(&lines, width(tab_width)),
            "tab width {tab_width}"
        );
    }
}

#[test]
fn test_tab_width_may_change_between_lines() {
    let mut classifier = Classifier::new();
    assert_eq!(
        classify_line(&mut classifier, "    ", width(2)),
        vec![Some("space1"), Some("space1"), Some("space2"), Some("space2")]
    );
    assert_eq!(
        classify_line(&mut classifier, "    ", width(4)),
        repeated("space1", 4)
    );
}

#[test]
fn test_exhausted_stream_yields_none() {
    let mut classifier = Classifier::new();
    let mut stream = LineStream::new("");
    assert_eq!(classifier.classify(&mut stream, width(4)), None);
    assert_eq!(classifier.depth(), 0);
}

#[test]
fn test_same_input_same_labels() {
    let lines = ["\t \t  \t   x", "  \t\t  y", "\t\t\t\t\t\t"];
    assert_eq!(classify_lines(&lines, width(3)), classify_lines(&lines, width(3)));
}

#[test]
fn test_invalid_tab_width() {
    assert_eq!(TabWidth::new(0), Err(ConfigurationError::InvalidTabWidth(0)));
    assert_eq!(TabWidth::new(-4), Err(ConfigurationError::InvalidTabWidth(-4)));
    assert_eq!(
        TabWidth::try_from(i64::MIN),
        Err(ConfigurationError::InvalidTabWidth(i64::MIN))
    );
    assert_eq!(TabWidth::new(1).map(TabWidth::get), Ok(1));
}

#[test]
fn test_line_stream_columns() {
    let mut stream = LineStream::new("\tä b");
    assert_eq!(stream.column(), 0);
    assert_eq!(stream.next(), Some('\t'));
    assert_eq!(stream.column(), 0);
    assert_eq!(stream.next(), Some('ä'));
    assert_eq!(stream.column(), 1);
    assert_eq!(stream.pos(), 3);
    assert_eq!(stream.next(), Some(' '));
    assert_eq!(stream.column(), 2);
    assert!(!stream.at_line_end());
    stream.skip_to_line_end();
    assert!(stream.at_line_end());
    assert_eq!(stream.next(), None);
}
