//! Catalog page: category filter chips over the product grid. Filtering is
//! done by `CatalogView`; this page only renders what it derives.

use crate::app_lib::AppError;
use crate::components::{Alert, AlertKind, AppShell, Button, Spinner};
use crate::features::catalog::load as load_catalog;
use catalog::{Catalog, CatalogView, Product};
use leptos::{prelude::*, task::spawn_local};
use std::sync::Arc;

#[component]
fn ProductCard(product: Product) -> impl IntoView {
    view! {
        <article class="overflow-hidden rounded-xl border border-gray-200 bg-white shadow-sm">
            <img src=product.image.clone() alt=product.name.clone() class="h-56 w-full object-contain bg-gray-50" loading="lazy" />
            <div class="p-4">
                <span class="text-xs uppercase tracking-wide text-teal-700">{product.category.clone()}</span>
                <h3 class="mt-1 text-lg font-semibold text-gray-900">{product.name.clone()}</h3>
                <p class="mt-2 text-sm text-gray-600">{product.details.clone()}</p>
            </div>
        </article>
    }
}

#[component]
fn CategoryFilter(view_model: RwSignal<CatalogView>) -> impl IntoView {
    let options = move || {
        view_model.with(|view| {
            let counts = view.counts();
            let total = view.catalog().len();
            view.category_options()
                .into_iter()
                .map(|option| {
                    let count = counts
                        .iter()
                        .find(|(name, _)| *name == option)
                        .map_or(total, |(_, count)| *count);
                    (option.to_string(), count)
                })
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="flex flex-wrap gap-2" role="tablist">
            <For
                each=options
                key=|(option, count)| (option.clone(), *count)
                children=move |(option, count)| {
                    let selected = {
                        let option = option.clone();
                        Signal::derive(move || view_model.with(|view| view.selected().as_str() == option))
                    };
                    let pick = {
                        let option = option.clone();
                        Callback::new(move |()| view_model.update(|view| view.select_category(option.as_str())))
                    };
                    view! {
                        <Button outline=Signal::derive(move || !selected.get()) on_click=pick>
                            {format!("{option} ({count})")}
                        </Button>
                    }
                }
            />
        </div>
    }
}

#[component]
fn ProductGrid(view_model: RwSignal<CatalogView>) -> impl IntoView {
    let visible = move || {
        view_model.with(|view| {
            view.visible_products()
                .into_iter()
                .cloned()
                .collect::<Vec<_>>()
        })
    };
    let empty = move || view_model.with(CatalogView::is_empty);

    view! {
        <Show
            when=move || !empty()
            fallback=|| {
                view! {
                    <div class="py-16 text-center text-gray-500">
                        "No products found in this category."
                    </div>
                }
            }
        >
            <div class="grid gap-6 sm:grid-cols-2 lg:grid-cols-3">
                <For
                    each=visible
                    key=|product| product.id
                    children=|product| view! { <ProductCard product=product /> }
                />
            </div>
        </Show>
    }
}

#[component]
pub fn ProductsPage() -> impl IntoView {
    let (loaded, set_loaded) = signal::<Option<Result<Arc<Catalog>, AppError>>>(None);

    spawn_local(async move {
        set_loaded.set(Some(load_catalog().await.map(Arc::new)));
    });

    view! {
        <AppShell>
            <section class="max-w-screen-xl mx-auto p-6 space-y-6">
                <header>
                    <h1 class="text-3xl font-bold text-teal-900">"Our bottles"</h1>
                    <p class="text-gray-600">"Filter by collection to compare sizes and minimum order quantities."</p>
                </header>
                {move || match loaded.get() {
                    None => view! { <div class="flex justify-center py-16"><Spinner label="Loading products" /></div> }.into_any(),
                    Some(Err(err)) => view! { <Alert kind=AlertKind::Error message=err.to_string() /> }.into_any(),
                    Some(Ok(table)) => {
                        let view_model = RwSignal::new(CatalogView::new(table));
                        view! {
                            <CategoryFilter view_model=view_model />
                            <ProductGrid view_model=view_model />
                        }
                        .into_any()
                    }
                }}
            </section>
        </AppShell>
    }
}
