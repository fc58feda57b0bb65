// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

pub const LISTRESPONSE_URN: &str =
    "urn:ietf:params:scim:api:messages:2.0:ListResponse";
pub const RESOURCETYPE_URN: &str =
    "urn:ietf:params:scim:schemas:core:2.0:ResourceType";
pub const SERVICEPROVIDERCONFIG_URN: &str =
    "urn:ietf:params:scim:schemas:core:2.0:ServiceProviderConfig";
pub const USER_URN: &str = "urn:ietf:params:scim:schemas:core:2.0:User";
pub const VAULT_USER_URN: &str =
    "urn:ietf:params:scim:schemas:extension:veevavault:2.0:User";
