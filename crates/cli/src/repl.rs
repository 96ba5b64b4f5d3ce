//! The interactive shell: line commands in, screens and toasts out.

use std::io::{self, BufRead, Write as _};

use mercadito_core::ProductId;
use mercadito_storefront::shop::Shop;
use mercadito_storefront::view::View;

use crate::{image, render};

const HELP: &str = "\
Commands:
  show                     redraw the current screen
  go <catalog|admin|cart>  switch screens (bare screen names work too)
  add <n>                  add catalog product #n to the cart
  qty <n> <quantity>       set cart line #n to an exact quantity (<=0 removes)
  rm <n>                   remove cart line #n
  del <n>                  delete product #n from the store (admin)
  set <field> <value>      fill a form field (admin: name/price/category/
                           description/image; cart: name/email/phone/address/
                           city/zip)
  image <path>             load a file into the product form as a data URI
  submit                   submit the current screen's form
  help                     this text
  quit                     leave the shop";

/// One parsed shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Show,
    Go(View),
    Add(usize),
    Quantity(usize, i64),
    Remove(usize),
    Delete(usize),
    Set(String, String),
    Image(String),
    Submit,
    Quit,
}

/// Whether the loop keeps reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Parse one input line. Blank lines parse to `None`.
///
/// # Errors
///
/// Returns a message suitable for printing when the line is not a valid
/// command.
pub fn parse(line: &str) -> Result<Option<Command>, String> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let (word, rest) = split_word(trimmed);
    let command = match word.to_ascii_lowercase().as_str() {
        "help" | "?" => Command::Help,
        "show" => Command::Show,
        "go" => Command::Go(rest.parse::<View>()?),
        "catalog" | "store" | "admin" | "cart" => Command::Go(word.parse::<View>()?),
        "add" => Command::Add(parse_index(rest)?),
        "qty" => {
            let (index_word, quantity_word) = split_word(rest);
            let index = parse_index(index_word)?;
            let quantity = quantity_word
                .parse::<i64>()
                .map_err(|_| format!("not a quantity: {quantity_word:?}"))?;
            Command::Quantity(index, quantity)
        }
        "rm" => Command::Remove(parse_index(rest)?),
        "del" => Command::Delete(parse_index(rest)?),
        "set" => {
            let (field, value) = split_word(rest);
            if field.is_empty() {
                return Err("usage: set <field> <value>".to_owned());
            }
            Command::Set(field.to_ascii_lowercase(), value.to_owned())
        }
        "image" => {
            if rest.is_empty() {
                return Err("usage: image <path>".to_owned());
            }
            Command::Image(rest.to_owned())
        }
        "submit" | "checkout" => Command::Submit,
        "quit" | "exit" | "q" => Command::Quit,
        other => return Err(format!("unknown command: {other} (try 'help')")),
    };
    Ok(Some(command))
}

fn split_word(input: &str) -> (&str, &str) {
    input
        .split_once(char::is_whitespace)
        .map_or((input, ""), |(word, rest)| (word, rest.trim_start()))
}

fn parse_index(word: &str) -> Result<usize, String> {
    word.parse::<usize>()
        .ok()
        .filter(|&n| n >= 1)
        .ok_or_else(|| format!("expected an item number, got {word:?}"))
}

/// Run the shell until `quit` or end of input.
///
/// # Errors
///
/// Propagates stdin read failures.
pub fn run(shop: &mut Shop) -> Result<(), Box<dyn std::error::Error>> {
    println!("Mercadito - type 'help' for commands.");
    println!();
    println!("{}", render::screen(shop));
    prompt(shop);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        match parse(&line) {
            Ok(None) => {}
            Ok(Some(command)) => {
                if execute(shop, command) == Flow::Quit {
                    return Ok(());
                }
            }
            Err(message) => println!("{message}"),
        }
        prompt(shop);
    }
    Ok(())
}

fn prompt(shop: &Shop) {
    print!("mercadito:{}> ", shop.current_view());
    let _ = io::stdout().flush();
}

/// Apply one command to the shop, printing its outcome.
pub fn execute(shop: &mut Shop, command: Command) -> Flow {
    match command {
        Command::Help => println!("{HELP}"),
        Command::Show => println!("{}", render::screen(shop)),
        Command::Go(view) => {
            shop.navigate(view);
            println!("{}", render::screen(shop));
        }
        Command::Add(index) => match catalog_id(shop, index) {
            Some(id) => {
                shop.add_to_cart(&id);
                println!("Added to cart ({} items).", shop.cart_item_count());
            }
            None => println!("No product #{index} in the catalog."),
        },
        Command::Quantity(index, quantity) => match cart_id(shop, index) {
            Some(id) => {
                shop.set_cart_quantity(&id, quantity);
                println!("{}", render::screen(shop));
            }
            None => println!("No cart line #{index}."),
        },
        Command::Remove(index) => match cart_id(shop, index) {
            Some(id) => {
                shop.remove_from_cart(&id);
                println!("{}", render::screen(shop));
            }
            None => println!("No cart line #{index}."),
        },
        Command::Delete(index) => match catalog_id(shop, index) {
            Some(id) => {
                shop.delete_product(&id);
            }
            None => println!("No product #{index} in the catalog."),
        },
        Command::Set(field, value) => set_field(shop, &field, value),
        Command::Image(path) => match image::data_uri_from_file(path.as_ref()) {
            Ok(uri) => {
                shop.product_form_mut().image = uri;
                println!("Image loaded into the product form.");
            }
            Err(e) => println!("Could not read {path}: {e}"),
        },
        Command::Submit => submit(shop),
        Command::Quit => return Flow::Quit,
    }
    Flow::Continue
}

/// `set` is modal: it fills whichever form belongs to the active screen.
fn set_field(shop: &mut Shop, field: &str, value: String) {
    match shop.current_view() {
        View::Admin => {
            let form = shop.product_form_mut();
            match field {
                "name" => form.name = value,
                "price" => form.price = value,
                "image" => form.image = value,
                "description" | "desc" => form.description = value,
                "category" => form.category = value,
                _ => println!("Unknown product field: {field}"),
            }
        }
        View::Cart => {
            let customer = &mut shop.checkout_form_mut().customer;
            match field {
                "name" => customer.name = value,
                "email" => customer.email = value,
                "phone" => customer.phone = value,
                "address" => customer.address = value,
                "city" => customer.city = value,
                "zip" | "zipcode" => customer.zip_code = value,
                _ => println!("Unknown contact field: {field}"),
            }
        }
        View::Catalog => println!("'set' fills forms on the admin and cart screens."),
    }
}

/// `submit` is modal: the admin screen submits the product form, the cart
/// screen runs checkout.
fn submit(shop: &mut Shop) {
    match shop.current_view() {
        View::Admin => match shop.submit_product() {
            Ok(product) => println!("{} is now in the catalog.", product.name),
            Err(e) => println!("{e}"),
        },
        View::Cart => match shop.checkout() {
            Ok(summary) => {
                println!();
                println!("{}", summary.body);
                println!("Open this link in your mail client to send the order:");
                println!("{}", summary.mailto);
            }
            Err(e) => println!("{e}"),
        },
        View::Catalog => println!("'submit' works on the admin and cart screens."),
    }
}

fn catalog_id(shop: &Shop, index: usize) -> Option<ProductId> {
    shop.catalog()
        .products()
        .get(index.checked_sub(1)?)
        .map(|p| p.id.clone())
}

fn cart_id(shop: &Shop, index: usize) -> Option<ProductId> {
    shop.cart()
        .lines()
        .get(index.checked_sub(1)?)
        .map(|l| l.product_id.clone())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use mercadito_storefront::config::ShopConfig;

    fn demo_shop() -> Shop {
        Shop::new(ShopConfig::default())
    }

    #[test]
    fn test_parse_blank_line() {
        assert_eq!(parse("   ").unwrap(), None);
    }

    #[test]
    fn test_parse_navigation() {
        assert_eq!(parse("go cart").unwrap(), Some(Command::Go(View::Cart)));
        assert_eq!(parse("admin").unwrap(), Some(Command::Go(View::Admin)));
        assert_eq!(parse("store").unwrap(), Some(Command::Go(View::Catalog)));
    }

    #[test]
    fn test_parse_cart_commands() {
        assert_eq!(parse("add 2").unwrap(), Some(Command::Add(2)));
        assert_eq!(parse("qty 1 -5").unwrap(), Some(Command::Quantity(1, -5)));
        assert_eq!(parse("rm 3").unwrap(), Some(Command::Remove(3)));
    }

    #[test]
    fn test_parse_set_keeps_spaces_in_value() {
        assert_eq!(
            parse("set address Calle Mayor 1").unwrap(),
            Some(Command::Set("address".to_owned(), "Calle Mayor 1".to_owned()))
        );
    }

    #[test]
    fn test_parse_rejects_zero_index() {
        assert!(parse("add 0").is_err());
        assert!(parse("add x").is_err());
    }

    #[test]
    fn test_parse_unknown_command() {
        assert!(parse("dance").is_err());
    }

    #[test]
    fn test_add_to_cart_by_index() {
        let mut shop = demo_shop();
        assert_eq!(execute(&mut shop, Command::Add(1)), Flow::Continue);
        assert_eq!(shop.cart_item_count(), 1);
    }

    #[test]
    fn test_add_out_of_range_is_harmless() {
        let mut shop = demo_shop();
        execute(&mut shop, Command::Add(9));
        assert!(shop.cart().is_empty());
    }

    #[test]
    fn test_set_is_modal() {
        let mut shop = demo_shop();

        shop.navigate(View::Admin);
        execute(
            &mut shop,
            Command::Set("name".to_owned(), "Lamp".to_owned()),
        );
        assert_eq!(shop.product_form().name, "Lamp");

        shop.navigate(View::Cart);
        execute(
            &mut shop,
            Command::Set("city".to_owned(), "Madrid".to_owned()),
        );
        assert_eq!(shop.checkout_form().customer.city, "Madrid");
    }

    #[test]
    fn test_submit_product_via_shell() {
        let mut shop = demo_shop();
        shop.navigate(View::Admin);
        for (field, value) in [
            ("name", "Lamp"),
            ("price", "19.99"),
            ("category", "home"),
            ("description", "A small desk lamp."),
        ] {
            execute(&mut shop, Command::Set(field.to_owned(), value.to_owned()));
        }
        execute(&mut shop, Command::Submit);
        assert_eq!(shop.catalog().len(), 2);
    }

    #[test]
    fn test_quit() {
        let mut shop = demo_shop();
        assert_eq!(execute(&mut shop, Command::Quit), Flow::Quit);
    }
}
