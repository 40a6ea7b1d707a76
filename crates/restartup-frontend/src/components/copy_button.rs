use restartup::log::warn;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CopyButtonProps {
    /// Text written to the clipboard.
    pub text: AttrValue,
    #[prop_or(AttrValue::Static("Copy"))]
    pub label: AttrValue,
}

#[function_component(CopyButton)]
pub fn copy_button(props: &CopyButtonProps) -> Html {
    let is_copied = use_state(|| false);

    let copy = {
        let is_copied = is_copied.clone();
        let text = props.text.clone();
        Callback::from(move |_| {
            let Some(window) = web_sys::window() else {
                return;
            };
            let clipboard = window.navigator().clipboard();
            let is_copied = is_copied.clone();
            let text = text.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let result = wasm_bindgen_futures::JsFuture::from(clipboard.write_text(&text)).await;
                match result {
                    Ok(_) => {
                        is_copied.set(true);

                        // Reset after 2 seconds
                        let is_copied_reset = is_copied.clone();
                        gloo_timers::callback::Timeout::new(2000, move || {
                            is_copied_reset.set(false);
                        })
                        .forget();
                    }
                    Err(err) => warn!("Clipboard write failed: {:?}", err),
                }
            });
        })
    };

    let button_classes = if *is_copied {
        "ml-3 px-3 py-1.5 bg-green-600 hover:bg-green-700 text-white text-xs rounded-md focus:outline-none focus:ring-2 focus:ring-green-500 transition-all duration-200"
    } else {
        "ml-3 px-3 py-1.5 bg-indigo-600 hover:bg-indigo-700 text-white text-xs rounded-md focus:outline-none focus:ring-2 focus:ring-indigo-500 transition-all duration-200"
    };

    html! {
        <button class={button_classes} onclick={copy}>
            {
                if *is_copied {
                    html! {
                        <span class="flex items-center space-x-1">
                            <svg class="h-3 w-3" fill="currentColor" viewBox="0 0 20 20">
                                <path fill-rule="evenodd" d="M16.707 5.293a1 1 0 010 1.414l-8 8a1 1 0 01-1.414 0l-4-4a1 1 0 011.414-1.414L8 12.586l7.293-7.293a1 1 0 011.414 0z" clip-rule="evenodd" />
                            </svg>
                            <span>{ "Copied!" }</span>
                        </span>
                    }
                } else {
                    html! { <span>{ props.label.clone() }</span> }
                }
            }
        </button>
    }
}
