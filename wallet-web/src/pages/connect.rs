//! Connect Page - binds the connection flow to the page markup
//!
//! The page ships the button, the address and network text elements, and the hidden
//! info panel. This module looks them up once at startup and wires the button's click
//! to [`connect_wallet`].

use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, MouseEvent, Window};

use crate::error::PageError;
use crate::services::connect::connect_wallet;
use crate::services::display::Sinks;
use crate::services::wallet::detect_provider;
use crate::state::wallet::WalletContext;
use crate::utils::PageConfig;

/// DOM handles of the connect page.
pub struct ConnectPage {
    window: Window,
    address: HtmlElement,
    network: HtmlElement,
    info_panel: HtmlElement,
    wallet: WalletContext,
}

impl ConnectPage {
    /// Look up every element the flow writes to.
    pub fn bind(config: &PageConfig, wallet: WalletContext) -> Result<Self, PageError> {
        let window = web_sys::window().ok_or(PageError::NoWindow)?;
        let document = window.document().ok_or(PageError::NoDocument)?;

        Ok(Self {
            address: find_element(&document, &config.wallet_address_id)?,
            network: find_element(&document, &config.network_info_id)?,
            info_panel: find_element(&document, &config.wallet_info_id)?,
            window,
            wallet,
        })
    }

    /// Bind the page and attach the click listener to the connect button.
    pub fn mount(config: &PageConfig, wallet: WalletContext) -> Result<(), PageError> {
        let page = Rc::new(Self::bind(config, wallet)?);
        let document = page.window.document().ok_or(PageError::NoDocument)?;
        let button = find_element(&document, &config.connect_button_id)?;

        let handler_page = Rc::clone(&page);
        let on_click = Closure::<dyn FnMut(MouseEvent)>::new(move |_event: MouseEvent| {
            Rc::clone(&handler_page).on_click();
        });
        button
            .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
            .map_err(|e| PageError::Listener(format!("{:?}", e)))?;
        // The listener lives as long as the page.
        on_click.forget();

        log::info!("Connect button bound to #{}", config.connect_button_id);
        Ok(())
    }

    fn sinks(&self) -> Sinks<'_> {
        Sinks {
            address: &self.address,
            network: &self.network,
            info_panel: &self.info_panel,
            alerts: &self.window,
        }
    }

    fn on_click(self: Rc<Self>) {
        if let Some(summary) = self.wallet.state().summary() {
            log::info!("Already connected as {}; requesting accounts again", summary);
        }

        wasm_bindgen_futures::spawn_local(async move {
            let provider = detect_provider();
            if let Ok(result) = connect_wallet(provider.as_ref(), &self.sinks()).await {
                self.wallet.set_connected(&result);
            }
        });
    }
}

fn find_element(document: &Document, id: &str) -> Result<HtmlElement, PageError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| PageError::MissingElement(id.to_string()))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| PageError::NotHtmlElement(id.to_string()))
}
