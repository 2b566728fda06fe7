use crate::domain::entities::checkout::Cart;

#[test]
fn test_storefront_cart() {
    let cart = Cart::storefront();

    assert_eq!(cart.currency, "eur");
    assert_eq!(cart.items.len(), 2);
    assert_eq!(cart.items[0].name, "Keks");
    assert_eq!(cart.items[0].unit_amount, 1500);
    assert_eq!(cart.items[1].name, "Kuchen");
    assert_eq!(cart.items[1].unit_amount, 2500);
    assert!(cart
        .items
        .iter()
        .all(|item| item.quantity == 1
            && item.tax_code == "txcd_99999999"
            && item.description == "lecker lecker"));
    assert_eq!(cart.total(), 4000);
}
