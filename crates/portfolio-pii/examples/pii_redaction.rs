//! PII redaction example.
//!
//! This example demonstrates scanning free-form text for personally
//! identifiable information, redacting it, and keeping an allowlist of
//! approved values on disk.
//!
//! Run with: `RUST_LOG=portfolio_pii=debug cargo run --example pii_redaction`

use portfolio_pii::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("portfolio-pii Redaction Example");
    println!("===============================\n");

    // Example 1: Scanning
    println!("1. Scanning...");

    let texts = [
        "Hello, world!",
        "Call me at (555) 123-4567",
        "SSN: 123-45-6789",
        "Email: a@b.com, Phone: (555) 123-4567, Alt: c@d.com",
        "DOB: 01/15/1990, 100 Main St, Springfield, IL 62704",
    ];

    let mut scanner = PiiScanner::with_config(ScannerConfig::resolve(None)?)?;
    for (text, result) in texts.iter().zip(scanner.scan_batch(&texts)) {
        println!("   {text:?}");
        println!(
            "      risk={} review={} items={}",
            result.risk_level,
            result.requires_review,
            result.items.len()
        );
        for item in &result.items {
            println!(
                "      - {} {:?} at {}..{} ({:.2})",
                item.category, item.value, item.span.start, item.span.end, item.confidence
            );
        }
    }

    // Example 2: Redaction
    println!("\n2. Redaction...");

    let content = "Reach Jane at jane@example.com or 555.123.4567. Card: 4111-1111-1111-1111";
    let out = scanner.scan_and_redact(content);
    println!("   Original: {content}");
    println!("   Redacted: {}", out.redacted_content);

    // Example 3: Other styles
    println!("\n3. Redaction styles...");

    for style in [RedactionStyle::Asterisks, RedactionStyle::PartialMask] {
        let redactor = Redactor::new().style(style);
        println!(
            "   {style:?}: {}",
            redactor.redact(content, &out.scan_result.items)
        );
    }

    // Example 4: Allowlist
    println!("\n4. Allowlist...");

    scanner.add_to_allowlist("jane@example.com", Some(PiiCategory::Email), Some("public contact"));
    let out = scanner.scan_and_redact(content);
    println!("   With allowlist: {}", out.redacted_content);

    // Example 5: Persistence
    println!("\n5. Persistence...");

    let path = std::env::temp_dir().join("portfolio-pii-example").join("allowlist.json");
    scanner.set_allowlist_path(&path);
    scanner.save_allowlist(None).await?;
    println!("   Saved {} entries to {}", scanner.get_allowlist().len(), path.display());

    let mut restored = PiiScanner::new();
    let loaded = restored.load_allowlist(Some(path.as_path())).await?;
    println!("   Loaded: {loaded}, entries: {:?}", restored.get_allowlist());

    println!("\nAll examples completed successfully!");
    Ok(())
}
