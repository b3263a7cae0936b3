//! Third-party social SDK loaders.
//!
//! Each enabled SDK contributes one inline loader script to the footer.
//! The Facebook SDK additionally needs the `fb-root` marker element.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Serialize;

/// Marker element the Facebook SDK mounts into.
pub const FB_ROOT: &str = "<div id=\"fb-root\"></div>";

/// Default Facebook Graph API version.
pub const FACEBOOK_DEFAULT_VERSION: &str = "v2.0";

/// Unreserved URL characters stay readable in loader URLs.
const URL_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

const TWITTER_LOADER: &str = "!function(d,s,id){var js,fjs=d.getElementsByTagName(s)[0],p=/^http:/.test(d.location)?'http':'https';if(!d.getElementById(id)){js=d.createElement(s);js.id=id;js.src=p+'://platform.twitter.com/widgets.js';fjs.parentNode.insertBefore(js,fjs);}}(document,'script','twitter-wjs');";

const YOUTUBE_LOADER: &str = "(function(){var tag=document.createElement('script');tag.src='https://www.youtube.com/iframe_api';var s=document.getElementsByTagName('script')[0];s.parentNode.insertBefore(tag,s);})();";

const GOOGLE_PLUS_LOADER: &str = "(function(){var po=document.createElement('script');po.type='text/javascript';po.async=true;po.src='https://apis.google.com/js/platform.js';var s=document.getElementsByTagName('script')[0];s.parentNode.insertBefore(po,s);})();";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacebookSdk {
    pub app_id: String,
    pub version: String,
}

impl FacebookSdk {
    fn loader(&self, locale: &str) -> String {
        let encode = |s: &str| utf8_percent_encode(s, URL_COMPONENT).to_string();
        format!(
            "(function(d,s,id){{var js,fjs=d.getElementsByTagName(s)[0];if(d.getElementById(id))return;js=d.createElement(s);js.id=id;js.src='//connect.facebook.net/{}/sdk.js#xfbml=1&appId={}&version={}';fjs.parentNode.insertBefore(js,fjs);}}(document,'script','facebook-jssdk'));",
            encode(locale),
            encode(&self.app_id),
            encode(&self.version),
        )
    }
}

/// Which social SDKs the page embeds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SocialEmbeds {
    pub facebook: Option<FacebookSdk>,
    pub twitter: bool,
    pub youtube: bool,
    pub google_plus: bool,
}

impl SocialEmbeds {
    pub fn has_facebook(&self) -> bool {
        self.facebook.is_some()
    }

    /// Loader scripts for every enabled SDK, in a fixed order.
    pub fn snippets(&self, locale: &str) -> Vec<String> {
        let mut snippets = Vec::new();
        if let Some(facebook) = &self.facebook {
            snippets.push(facebook.loader(locale));
        }
        if self.twitter {
            snippets.push(TWITTER_LOADER.to_string());
        }
        if self.youtube {
            snippets.push(YOUTUBE_LOADER.to_string());
        }
        if self.google_plus {
            snippets.push(GOOGLE_PLUS_LOADER.to_string());
        }
        snippets
    }
}
