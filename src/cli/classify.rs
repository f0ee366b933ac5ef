use crate::classify::classify;
use crate::error::Result;
use crate::metafields;

pub fn run(text: &str) -> Result<()> {
    let promo = classify(text);
    println!("Kind:           {}", promo.kind.label());
    println!("Dollar value:   {}", promo.dollar_value);
    println!("Percent value:  {}", promo.percent_value);
    println!("Display text:   {}", promo.display_text);
    println!("Buy3Get1 flag:  {}", metafields::buy3get1_flag(&promo));
    println!("Promo details:  {}", metafields::promo_details(&promo));
    println!(
        "Filter:         {}",
        metafields::filter_promotion(&promo.display_text)
    );
    Ok(())
}
