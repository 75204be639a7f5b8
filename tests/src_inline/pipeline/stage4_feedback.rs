use super::*;
use crate::model::rubric::Rubric;

fn patterns() -> RubricPatterns {
    RubricPatterns::compile(&Rubric::call_training_v1()).unwrap()
}

const NARRATIVE: &str = "\
**Product Knowledge:** 8/10
→ Explained the package tiers clearly.
   Missed the loyalty discount.

**Costs & Booking:** 6.5/10
- Quoted the wrong deposit
- Did not confirm the date

**Tone of Voice:** 9/10 Warm and <b>patient</b> throughout.

**Critical Misses:** none worth noting

**💡 Coaching Tips:**
1. **Confirm the deposit** before quoting totals
2. Mention the loyalty discount when pricing comes up
3. Ok

**Next Steps:**
- Follow up next week with the revised quote
";

#[test]
fn test_category_blocks() {
    let out = run_stage4(NARRATIVE, &patterns());
    assert_eq!(out.categories.len(), 3);

    let pk = &out.categories["product_knowledge"];
    assert_eq!(pk.score_text, "8.0");
    assert_eq!(
        pk.reasoning,
        Reasoning::Block(
            "Explained the package tiers clearly. Missed the loyalty discount.".to_string()
        )
    );

    let cb = &out.categories["costs_booking"];
    assert_eq!(cb.score, 6.5);
    assert_eq!(cb.score_text, "6.5");
    assert_eq!(
        cb.reasoning,
        Reasoning::Bullets(vec![
            "Quoted the wrong deposit".to_string(),
            "Did not confirm the date".to_string(),
        ])
    );

    // Terminator heading closes the block.
    let tv = &out.categories["tone_voice"];
    assert_eq!(
        tv.reasoning,
        Reasoning::Block("Warm and <b>patient</b> throughout.".to_string())
    );
}

#[test]
fn test_coaching_tips_section() {
    let out = run_stage4(NARRATIVE, &patterns());
    assert_eq!(
        out.overall.coaching_tips,
        vec![
            "Confirm the deposit before quoting totals".to_string(),
            "Mention the loyalty discount when pricing comes up".to_string(),
        ]
    );
}

#[test]
fn test_costs_and_booking_synonym() {
    let out = parse_category_blocks("Costs and Booking: 7/10 Clear quote.", &patterns());
    let entry = &out["costs_booking"];
    assert_eq!(entry.score_text, "7.0");
    assert_eq!(entry.reasoning, Reasoning::Block("Clear quote.".to_string()));
}

#[test]
fn test_unrecognized_header_gets_derived_key() {
    let out = parse_category_blocks("Cost Booking: 4/10 Fine.\nProductKnowledge: 3/10 Weak.", &patterns());
    assert_eq!(out["costs_booking"].score_text, "4.0");
    assert!(out.contains_key("productknowledge"));
}

#[test]
fn test_header_without_score_still_ends_previous_block() {
    let text = "Product Knowledge: 8/10 Solid answers.\nTone of Voice: good overall";
    let out = parse_category_blocks(text, &patterns());
    assert_eq!(out.len(), 1);
    assert_eq!(
        out["product_knowledge"].reasoning,
        Reasoning::Block("Solid answers.".to_string())
    );
}

#[test]
fn test_bullet_items_are_stripped_of_tags() {
    let reasoning = render_reasoning("• <em>Great</em> rapport • Clear <b>close</b>");
    assert_eq!(
        reasoning,
        Reasoning::Bullets(vec!["Great rapport".to_string(), "Clear close".to_string()])
    );
    assert_eq!(reasoning.to_html(), "<ul><li>Great rapport</li><li>Clear close</li></ul>");
}

#[test]
fn test_block_rendering() {
    let reasoning = render_reasoning("  → Calm\n and   steady ");
    assert_eq!(reasoning, Reasoning::Block("Calm and steady".to_string()));
    assert_eq!(reasoning.to_html(), "<p>Calm and steady</p>");
}

#[test]
fn test_short_tips_are_dropped() {
    let text = "**COACHING TIPS:**\n1. Improve hold time management\n2. Hi";
    assert_eq!(
        extract_coaching_tips(text),
        vec!["Improve hold time management".to_string()]
    );
}

#[test]
fn test_tip_exactly_ten_chars_is_dropped() {
    assert_eq!(clean_tip("0123456789"), None);
    assert_eq!(clean_tip("  **01234567890**  "), Some("01234567890".to_string()));
}

#[test]
fn test_multiline_tip_is_joined() {
    let text = "💡 COACHING TIPS for this call\n- Slow down when\n  reading prices\n- Summarize the booking at the end";
    assert_eq!(
        extract_coaching_tips(text),
        vec![
            "Slow down when reading prices".to_string(),
            "Summarize the booking at the end".to_string(),
        ]
    );
}

#[test]
fn test_first_heading_without_tips_falls_through() {
    let text = "**💡 Coaching Tips:**\nnone\n\n**COACHING TIPS (detailed):**\n* Ask about travel dates first";
    assert_eq!(
        extract_coaching_tips(text),
        vec!["Ask about travel dates first".to_string()]
    );
}

#[test]
fn test_missing_tips_section_is_empty() {
    assert!(extract_coaching_tips("Product Knowledge: 8/10").is_empty());
    assert!(extract_coaching_tips("").is_empty());
}

#[test]
fn test_key_resolution_is_idempotent() {
    let p = patterns();
    let first = parse_category_blocks(NARRATIVE, &p);
    let rubric = Rubric::call_training_v1();
    let mut rebuilt = String::new();
    for (key, entry) in &first {
        let label = &rubric.category(key).unwrap().label;
        rebuilt.push_str(&format!(
            "{label}: {}/10 {}\n",
            entry.score_text,
            entry.reasoning.to_plain()
        ));
    }
    let second = parse_category_blocks(&rebuilt, &p);
    let first_keys: Vec<&String> = first.keys().collect();
    let second_keys: Vec<&String> = second.keys().collect();
    assert_eq!(first_keys, second_keys);
}

#[test]
fn test_non_ascii_text_does_not_panic() {
    let text = "Tone of Voice: 7/10 — très bien ✓ • ok ✓\n💡 COACHING TIPS\n• Sourire davantage au téléphone";
    let out = run_stage4(text, &patterns());
    assert!(out.categories.contains_key("tone_voice"));
    assert_eq!(out.overall.coaching_tips, vec!["Sourire davantage au téléphone".to_string()]);
}
