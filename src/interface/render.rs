use crate::models::{PizzaSize, Receipt, Topping};

/// Display the size and topping catalogs.
pub fn display_menu(sizes: &[PizzaSize], toppings: &[Topping]) {
    println!();
    println!("=== Menu ===");
    println!();

    println!("Sizes:");
    for size in sizes {
        println!("  {:<12} ${:.2}", size.name, size.price);
    }

    let standard: Vec<&Topping> = toppings.iter().filter(|t| t.is_standard()).collect();
    let premium: Vec<&Topping> = toppings.iter().filter(|t| t.is_premium()).collect();

    println!();
    println!("Standard toppings:");
    for topping in standard {
        println!("  {:<12} ${:.2}", topping.name, topping.price);
    }

    println!();
    println!("Premium toppings:");
    for topping in premium {
        println!("  {:<12} ${:.2}", topping.name, topping.price);
    }

    println!();
}

/// Display one size's toppings with their selection marks.
pub fn display_toppings(size_name: &str, toppings: &[Topping]) {
    println!();
    println!("Toppings for {}:", size_name);
    for topping in toppings {
        let mark = if topping.selected { "x" } else { " " };
        println!("  [{}] {:<12} ${:.2}", mark, topping.name, topping.price);
    }
    println!();
}

/// Display the receipt with per-size lines, offer savings, and grand total.
pub fn display_receipt(receipt: &Receipt) {
    if receipt.is_empty() {
        println!("Nothing ordered yet.");
        return;
    }

    println!();
    println!("=== Receipt ===");
    println!();

    let max_name_len = receipt
        .lines
        .iter()
        .map(|l| l.size.len())
        .max()
        .unwrap_or(10);

    for line in &receipt.lines {
        if line.quantity == 0 {
            continue;
        }

        let toppings_str = if line.toppings.is_empty() {
            String::new()
        } else {
            format!("  + {}", line.toppings.join(", "))
        };

        println!(
            "{:<width$} x{} - ${:>6.2}{}",
            line.size,
            line.quantity,
            line.subtotal,
            toppings_str,
            width = max_name_len
        );
    }

    if !receipt.offers.is_empty() {
        println!();
        println!("--- Offers applied ---");
        for offer in &receipt.offers {
            println!("{} ({}): -${:.2}", offer.offer, offer.size, offer.saved);
        }
    }

    println!();
    println!("Grand total: ${:.2}", receipt.grand_total);
    println!();
}
