//! Product Card Component
//!
//! One product in the listing: image, caption and add-to-cart link.

use leptos::prelude::*;

use crate::models::Product;

/// Card markup matching the server-rendered products:
/// `<div class="product"><img><p>name - price</p><a>label</a></div>`
#[component]
pub fn ProductCard(
    product: Product,
    #[prop(into)] cart_path: String,
    #[prop(into)] cart_label: String,
) -> impl IntoView {
    let image = product.image_src().to_string();
    let name = product.name_label().to_string();
    let caption = product.caption();
    let href = product.cart_href(&cart_path);

    view! {
        <div class="product">
            <img src=image alt=name />
            <p>{caption}</p>
            <a href=href>{cart_label}</a>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Scalar;
    use leptos::reactive::owner::Owner;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn test_card_markup() {
        let product = Product {
            id: Some(Scalar::Num(1.0)),
            name: Some("A".to_string()),
            price: Some(Scalar::Num(10.0)),
            image: Some("a.png".to_string()),
        };

        let html = Owner::new().with(|| {
            view! {
                <ProductCard
                    product=product
                    cart_path="/add_to_cart"
                    cart_label="Agregar al carrito"
                />
            }
            .to_html()
        });

        assert!(html.contains(r#"class="product""#));
        assert!(html.contains(r#"src="a.png""#));
        assert!(html.contains(r#"alt="A""#));
        assert!(html.contains("A - 10"));
        assert!(html.contains(r#"href="/add_to_cart/1""#));
        assert!(html.contains("Agregar al carrito"));
    }

    #[test]
    fn test_card_with_blank_product() {
        let html = Owner::new().with(|| {
            view! {
                <ProductCard
                    product=Product::default()
                    cart_path="/add_to_cart"
                    cart_label="Agregar al carrito"
                />
            }
            .to_html()
        });

        assert!(html.contains(r#"href="/add_to_cart/""#));
        assert!(html.contains(" - "));
    }
}
