use string_replace_rs::{MatchPattern, Node, ReplaceOptions, Rule, RuleSet};

#[derive(Debug, Clone, PartialEq)]
enum Span {
    Link(String),
    Bold(String),
    Numbered(usize, String),
}

#[test]
fn rule_set_when_applied_then_runs_rules_in_order() {
    let link = MatchPattern::global(r"(https?://\S+)").expect("pattern should compile");
    let mut rules = RuleSet::new()
        .rule(link, |m: &str, _: usize, _: usize| Span::Link(m.to_string()))
        .rule("important", |m: &str, _: usize, _: usize| Span::Bold(m.to_string()));

    let out = rules
        .apply("Important: see https://important.example now")
        .expect("rules should apply");

    assert_eq!(
        out,
        vec![
            Node::text(""),
            Node::item(Span::Bold("Important".into())),
            Node::text(": see "),
            Node::item(Span::Link("https://important.example".into())),
            Node::text(" now"),
        ]
    );
}

#[test]
fn rule_set_when_applied_then_indexes_restart_per_rule() {
    let mut rules = RuleSet::new()
        .rule("a", |m: &str, i: usize, _: usize| Span::Numbered(i, m.to_string()))
        .rule("b", |m: &str, i: usize, _: usize| Span::Numbered(i, m.to_string()));

    let out = rules.apply("a b a b").expect("rules should apply");
    let items: Vec<Span> = out.into_iter().filter_map(Node::into_item).collect();

    assert_eq!(
        items,
        vec![
            Span::Numbered(0, "a".into()),
            Span::Numbered(0, "b".into()),
            Span::Numbered(1, "a".into()),
            Span::Numbered(1, "b".into()),
        ]
    );
}

#[test]
fn rule_set_when_strict_then_only_the_source_is_checked() {
    let options = ReplaceOptions::builder()
        .strict(true)
        .build()
        .expect("options should build");
    let mut rules = RuleSet::new()
        .with_options(options)
        .rule("x", |_: &str, _: usize, _: usize| 1u8)
        .rule("y", |_: &str, _: usize, _: usize| 2u8);

    let out = rules.apply("xy").expect("leading empty text from the first pass is fine");
    assert_eq!(
        out,
        vec![
            Node::text(""),
            Node::item(1),
            Node::text(""),
            Node::item(2),
            Node::text(""),
        ]
    );

    assert!(rules.apply("").is_err());
}

#[test]
fn rule_set_when_rules_pushed_then_they_can_be_reused() {
    let mut calls = 0usize;
    {
        let mut rules = RuleSet::new();
        rules.push(Rule::new("o", |_: &str, _: usize, _: usize| {
            calls += 1;
            '0'
        }));
        assert_eq!(rules.len(), 1);

        let first = rules.apply("foo").expect("first apply should succeed");
        let second = rules.apply(first).expect("second apply should succeed");
        assert_eq!(second.iter().filter(|n| n.is_item()).count(), 2);
    }
    assert_eq!(calls, 2);
}
