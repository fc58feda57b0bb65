// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::*;

const ASCENDING_DESCENDING: &[&str] = &["ascending", "descending"];
const LOG_LEVELS: &[&str] = &[
    "all__sys",
    "exception__sys",
    "error__sys",
    "warn__sys",
    "info__sys",
    "debug__sys",
];
const PICKLIST_STATUSES: &[&str] = &["active", "inactive"];

/// Every endpoint this crate knows how to call.
pub static ENDPOINTS: &[Endpoint] = &[
    // Picklists
    Endpoint {
        id: "retrieve-all-picklists",
        tool_name: "retrieve_all_picklists",
        description: "Retrieve all picklists from Veeva Vault.",
        action: "retrieving picklists",
        method: Method::GET,
        path: "/api/{version}/objects/picklists",
        accept: MediaType::Json,
        body: BodyEncoding::None,
        response: ResponseKind::Json,
        params: &[],
    },
    Endpoint {
        id: "retrieve-picklist-values",
        tool_name: "retrieve_picklist_values",
        description: "Retrieve all available values configured on a picklist.",
        action: "retrieving picklist values",
        method: Method::GET,
        path: "/api/{version}/objects/picklists/{picklist_name}",
        accept: MediaType::Json,
        body: BodyEncoding::None,
        response: ResponseKind::Json,
        params: &[Param::path(
            "picklist_name",
            "The picklist name field value (license_type__v, product_family__c, region__c, etc.).",
        )],
    },
    Endpoint {
        id: "create-picklist-values",
        tool_name: "create_picklist_values",
        description: "Create new values for a specified picklist in Veeva Vault.",
        action: "creating picklist values",
        method: Method::POST,
        path: "/api/{version}/objects/picklists/{picklist_name}",
        accept: MediaType::Json,
        body: BodyEncoding::Form,
        response: ResponseKind::Json,
        params: &[
            Param::path(
                "picklist_name",
                "The name of the picklist to which values will be added.",
            ),
            Param::body(
                "values",
                "An array of values to add to the picklist.",
            )
            .of_kind(ParamKind::StringList),
        ],
    },
    Endpoint {
        id: "update-picklist-value-label",
        tool_name: "update_picklist_value_label",
        description: "Update the label of a picklist value in Veeva Vault.",
        action: "updating the picklist value label",
        method: Method::PUT,
        path: "/api/{version}/objects/picklists/{picklist_name}",
        accept: MediaType::Json,
        body: BodyEncoding::Form,
        response: ResponseKind::Json,
        params: &[
            Param::path("picklist_name", "The name of the picklist to update."),
            Param::body(
                "data",
                "The data to update the picklist value label, as picklist value name to new label pairs.",
            )
            .of_kind(ParamKind::Object),
        ],
    },
    Endpoint {
        id: "update-picklist-value",
        tool_name: "update_picklist_value",
        description: "Update a picklist value in Veeva Vault.",
        action: "updating the picklist value",
        method: Method::PUT,
        path: "/api/{version}/objects/picklists/{picklist_name}/{picklist_value_name}",
        accept: MediaType::Json,
        body: BodyEncoding::Form,
        response: ResponseKind::Json,
        params: &[
            Param::path("picklist_name", "The name of the picklist to update."),
            Param::path(
                "picklist_value_name",
                "The name of the picklist value to update.",
            ),
            Param::body(
                "name",
                "The new name for the picklist value. Special characters and double underscores __ are not allowed.",
            )
            .optional(),
            Param::body("status", "The new status for the picklist value.")
                .optional()
                .one_of(PICKLIST_STATUSES),
        ],
    },
    Endpoint {
        id: "inactivate-picklist-value",
        tool_name: "inactivate_picklist_value",
        description: "Inactivate a picklist value in Veeva Vault.",
        action: "inactivating the picklist value",
        method: Method::DELETE,
        path: "/api/{version}/objects/picklists/{picklist_name}/{picklist_value_name}",
        accept: MediaType::Json,
        body: BodyEncoding::None,
        response: ResponseKind::Json,
        params: &[
            Param::path(
                "picklist_name",
                "The name of the picklist to inactivate the value from.",
            ),
            Param::path(
                "picklist_value_name",
                "The name of the picklist value to be inactivated.",
            ),
        ],
    },
    // Object records and user actions
    Endpoint {
        id: "retrieve-object-record-user-actions",
        tool_name: "retrieve_object_record_user_actions",
        description: "Retrieve all available user actions for a specific object record in Veeva Vault.",
        action: "retrieving user actions",
        method: Method::GET,
        path: "/api/{version}/vobjects/{object_name}/{object_record_id}/actions",
        accept: MediaType::Json,
        body: BodyEncoding::None,
        response: ResponseKind::Json,
        params: &[
            Param::path("object_name", "The name of the object."),
            Param::path("object_record_id", "The ID of the object record."),
            Param::query(
                "loc",
                "When true, retrieves localized (translated) strings for the label.",
            )
            .of_kind(ParamKind::Boolean)
            .default_value("false"),
        ],
    },
    Endpoint {
        id: "retrieve-object-user-actions-details",
        tool_name: "retrieve_object_user_actions_details",
        description: "Retrieve details for a specific user action in Veeva Vault.",
        action: "retrieving user action details",
        method: Method::GET,
        path: "/api/{version}/vobjects/{object_name}/{object_record_id}/actions/{action_name}",
        accept: MediaType::Json,
        body: BodyEncoding::None,
        response: ResponseKind::Json,
        params: &[
            Param::path("object_name", "The object name__v field value."),
            Param::path(
                "object_record_id",
                "The object record id field value from which to retrieve user actions.",
            ),
            Param::path(
                "action_name",
                "The name of the Objectaction or Objectlifecyclestateuseraction to initiate.",
            ),
        ],
    },
    Endpoint {
        id: "initiate-object-action-on-a-single-record",
        tool_name: "initiate_object_action",
        description: "Initiate an action on a specific object record in Veeva Vault.",
        action: "initiating the object action",
        method: Method::POST,
        path: "/api/{version}/vobjects/{object_name}/{object_record_id}/actions/{action_name}",
        accept: MediaType::Json,
        body: BodyEncoding::Form,
        response: ResponseKind::Json,
        params: &[
            Param::path("object_name", "The name of the object."),
            Param::path("object_record_id", "The ID of the object record."),
            Param::path("action_name", "The name of the action to initiate."),
            Param::body(
                "storyEventkey",
                "The ID of the target Story Event object record.",
            )
            .optional(),
        ],
    },
    Endpoint {
        id: "initiate-object-action-on-multiple-records",
        tool_name: "initiate_object_action_on_multiple_records",
        description: "Initiate an object action on multiple records in Veeva Vault.",
        action: "initiating the object action",
        method: Method::POST,
        path: "/api/{version}/vobjects/{object_name}/actions/{action_name}",
        accept: MediaType::Json,
        body: BodyEncoding::Form,
        response: ResponseKind::Json,
        params: &[
            Param::path("object_name", "The name of the object."),
            Param::path("action_name", "The action to initiate on the object."),
            Param::body(
                "ids",
                "Comma separated list of object record ids on which to initiate the action.",
            ),
        ],
    },
    Endpoint {
        id: "cancel-raw-object-deployment",
        tool_name: "cancel_raw_object_deployment",
        description: "Cancel a deployment of configuration changes to a raw object in Veeva Vault.",
        action: "canceling the deployment",
        method: Method::POST,
        path: "/api/{version}/metadata/vobjects/{object_name}/actions/canceldeployment",
        accept: MediaType::Json,
        body: BodyEncoding::None,
        response: ResponseKind::Json,
        params: &[Param::path(
            "object_name",
            "The name of the raw object for which to cancel the deployment.",
        )],
    },
    // Multi-record workflows
    Endpoint {
        id: "retrieve-all-multi-record-workflows",
        tool_name: "retrieve_multi_record_workflows",
        description: "Retrieve all available multi-record workflows from Veeva Vault.",
        action: "retrieving multi-record workflows",
        method: Method::GET,
        path: "/api/{version}/objects/objectworkflows/actions",
        accept: MediaType::Json,
        body: BodyEncoding::None,
        response: ResponseKind::Json,
        params: &[],
    },
    Endpoint {
        id: "retrieve-multi-record-workflow-details",
        tool_name: "retrieve_multi_record_workflow_details",
        description: "Retrieve details of a specific multi-record workflow from Veeva Vault API.",
        action: "retrieving multi-record workflow details",
        method: Method::GET,
        path: "/api/{version}/objects/objectworkflows/actions/{workflow_name}",
        accept: MediaType::Json,
        body: BodyEncoding::None,
        response: ResponseKind::Json,
        params: &[Param::path(
            "workflow_name",
            "The name of the multi-record workflow to retrieve details for.",
        )],
    },
    Endpoint {
        id: "initiate-multi-record-workflow",
        tool_name: "initiate_multi_record_workflow",
        description: "Initiate a multi-record workflow in Veeva Vault.",
        action: "initiating the workflow",
        method: Method::POST,
        path: "/api/{version}/objects/objectworkflows/actions/{workflow_name}",
        accept: MediaType::Json,
        body: BodyEncoding::Form,
        response: ResponseKind::Json,
        params: &[
            Param::path("workflow_name", "The name of the workflow to initiate."),
            Param::body(
                "contents__sys",
                "A comma-separated list of records in the format Object:{objectname}.{record_ID}.",
            ),
            Param::body("description__sys", "Description of the workflow."),
        ],
    },
    // Audit trails
    Endpoint {
        id: "retrieve-audit-types",
        tool_name: "retrieve_audit_types",
        description: "Retrieve all available audit types you have permission to access.",
        action: "retrieving audit types",
        method: Method::GET,
        path: "/api/{version}/metadata/audittrail",
        accept: MediaType::Json,
        body: BodyEncoding::None,
        response: ResponseKind::Json,
        params: &[],
    },
    Endpoint {
        id: "retrieve-audit-metadata",
        tool_name: "retrieve_audit_metadata",
        description: "Retrieve audit metadata from Veeva Vault API.",
        action: "retrieving audit metadata",
        method: Method::GET,
        path: "/api/{version}/metadata/audittrail/{audit_trail_type}",
        accept: MediaType::Json,
        body: BodyEncoding::None,
        response: ResponseKind::Json,
        params: &[Param::path(
            "audit_trail_type",
            "The name of the specified audit type (document_audit_trail, object_audit_trail, etc).",
        )],
    },
    Endpoint {
        id: "retrieve-audit-details",
        tool_name: "retrieve_audit_details",
        description: "Retrieve audit details from Veeva Vault.",
        action: "retrieving audit details",
        method: Method::GET,
        path: "/api/{version}/audittrail/{audit_trail_type}",
        accept: MediaType::Json,
        body: BodyEncoding::None,
        response: ResponseKind::Json,
        params: &[
            Param::path(
                "audit_trail_type",
                "The type of audit trail to retrieve.",
            ),
            Param::query(
                "start_date",
                "Specify a start date to retrieve audit information.",
            ),
            Param::query(
                "end_date",
                "Specify an end date to retrieve audit information.",
            ),
            Param::query(
                "all_dates",
                "Set to true to request audit information for all dates.",
            )
            .of_kind(ParamKind::Boolean),
            Param::query(
                "format_result",
                "To request a downloadable CSV file of your audit details.",
            ),
            Param::query(
                "limit",
                "Paginate the results by specifying the maximum number of histories per page.",
            )
            .of_kind(ParamKind::Integer),
            Param::query(
                "offset",
                "Specify the amount of offset from the entry returned for pagination.",
            )
            .of_kind(ParamKind::Integer),
            Param::query(
                "objects",
                "A comma-separated list of object names to retrieve their audit details.",
            ),
            Param::query(
                "events",
                "A comma-separated list of audit events to retrieve their audit details.",
            ),
        ],
    },
    Endpoint {
        id: "retrieve-complete-audit-history-for-a-single-object-record",
        tool_name: "retrieve_audit_history",
        description: "Retrieve complete audit history for a single object record in Veeva Vault.",
        action: "retrieving audit history",
        method: Method::GET,
        path: "/api/{version}/vobjects/{object_name}/{object_record_id}/audittrail",
        accept: MediaType::Json,
        body: BodyEncoding::None,
        response: ResponseKind::Json,
        params: &[
            Param::path("object_name", "The object name__v field value."),
            Param::path(
                "object_record_id",
                "The object record id field value from which to retrieve user actions.",
            ),
            Param::query(
                "start_date",
                "Specify a start date to retrieve audit history in YYYY-MM-DDTHH:MM:SSZ format.",
            ),
            Param::query(
                "end_date",
                "Specify an end date to retrieve audit history in YYYY-MM-DDTHH:MM:SSZ format.",
            ),
            Param::query(
                "format_result",
                "To request a CSV file of your audit history, use \"csv\".",
            ),
            Param::query(
                "limit",
                "Maximum number of histories per page in the response (1-1000).",
            )
            .of_kind(ParamKind::Integer),
            Param::query(
                "offset",
                "Amount of offset from the entry returned for pagination.",
            )
            .of_kind(ParamKind::Integer),
            Param::query(
                "events",
                "Comma-separated list of one or more audit events to retrieve their audit history.",
            ),
        ],
    },
    // Configuration and MDL
    Endpoint {
        id: "retrieve-component-record-collection",
        tool_name: "retrieve_component_records",
        description: "Retrieve all records for a specific component type from Veeva Vault.",
        action: "retrieving component records",
        method: Method::GET,
        path: "/api/{version}/configuration/{component_type}",
        accept: MediaType::Json,
        body: BodyEncoding::None,
        response: ResponseKind::Json,
        params: &[Param::path(
            "component_type",
            "The type of component to retrieve records for.",
        )],
    },
    Endpoint {
        id: "retrieve-component-record-xml-json",
        tool_name: "retrieve_component_record",
        description: "Retrieve metadata of a specific component record from Veeva Vault.",
        action: "retrieving the component record",
        method: Method::GET,
        path: "/api/{version}/configuration/{componentTypeAndRecordName}",
        accept: MediaType::Json,
        body: BodyEncoding::None,
        response: ResponseKind::Json,
        params: &[
            Param::path(
                "componentTypeAndRecordName",
                "The component type name followed by the name of the record (e.g., `Picklist.color__c`).",
            ),
            Param::query(
                "loc",
                "When localized strings are available, set to true to retrieve them.",
            )
            .of_kind(ParamKind::Boolean),
        ],
    },
    Endpoint {
        id: "retrieve-component-record-mdl",
        tool_name: "retrieve_component_record_mdl",
        description: "Retrieve a component record from Veeva Vault as MDL.",
        action: "retrieving the component record",
        method: Method::GET,
        path: "/api/mdl/components/{componentTypeAndRecordName}",
        accept: MediaType::Json,
        body: BodyEncoding::None,
        response: ResponseKind::Json,
        params: &[Param::path(
            "componentTypeAndRecordName",
            "The component type name followed by the name of the record (e.g., `Picklist.color__c`).",
        )],
    },
    Endpoint {
        id: "execute-mdl-script-asynchronously",
        tool_name: "execute_mdl_async",
        description: "Execute an MDL script asynchronously on Veeva Vault.",
        action: "executing the MDL script",
        method: Method::POST,
        path: "/api/mdl/execute_async",
        accept: MediaType::Json,
        body: BodyEncoding::Text,
        response: ResponseKind::Json,
        params: &[Param::body("script", "The MDL script to execute.")
            .optional()],
    },
    Endpoint {
        id: "retrieve-asynchronous-mdl-script-results",
        tool_name: "retrieve_async_mdl_results",
        description: "Retrieve asynchronous MDL script results from Veeva Vault.",
        action: "retrieving MDL script results",
        method: Method::GET,
        path: "/api/mdl/execute_async/{job_id}/results",
        accept: MediaType::Json,
        body: BodyEncoding::None,
        response: ResponseKind::Json,
        params: &[Param::path(
            "job_id",
            "The job ID for which to retrieve results.",
        )],
    },
    Endpoint {
        id: "upload-content-file",
        tool_name: "upload_content_file",
        description: "Upload a content file to Veeva Vault.",
        action: "uploading the file",
        method: Method::POST,
        path: "/api/mdl/files",
        accept: MediaType::Json,
        body: BodyEncoding::Multipart,
        response: ResponseKind::Json,
        params: &[Param::body(
            "file",
            "Path of the local file to be uploaded.",
        )
        .of_kind(ParamKind::File)],
    },
    Endpoint {
        id: "retrieve-content-file",
        tool_name: "retrieve_content_file",
        description: "Retrieve the content file of a specified component from Veeva Vault.",
        action: "retrieving the content file",
        method: Method::GET,
        path: "/api/mdl/components/{component_type_and_record_name}/files",
        accept: MediaType::Json,
        body: BodyEncoding::None,
        response: ResponseKind::Json,
        params: &[Param::path(
            "component_type_and_record_name",
            "The component type and record name in the format `{Componenttype}.{record_name}`.",
        )],
    },
    // Sandbox vaults and snapshots
    Endpoint {
        id: "retrieve-sandbox-snapshots",
        tool_name: "retrieve_sandbox_snapshots",
        description: "Retrieve sandbox snapshots from Veeva Vault.",
        action: "retrieving sandbox snapshots",
        method: Method::GET,
        path: "/api/{version}/objects/sandbox/snapshot",
        accept: MediaType::Json,
        body: BodyEncoding::None,
        response: ResponseKind::Json,
        params: &[],
    },
    Endpoint {
        id: "create-sandbox-snapshot",
        tool_name: "create_sandbox_snapshot",
        description: "Create a new snapshot for the indicated sandbox Vault.",
        action: "creating the sandbox snapshot",
        method: Method::POST,
        path: "/api/{version}/objects/sandbox/snapshot",
        accept: MediaType::Json,
        body: BodyEncoding::Form,
        response: ResponseKind::Json,
        params: &[
            Param::body(
                "source_sandbox",
                "The name of the sandbox Vault to take a snapshot of.",
            ),
            Param::body("name", "The name of the new snapshot."),
            Param::body("description", "The description of the new snapshot.")
                .optional(),
            Param::body(
                "include_data",
                "Set to true to include data as part of the snapshot.",
            )
            .of_kind(ParamKind::Boolean)
            .default_value("false"),
        ],
    },
    Endpoint {
        id: "delete-sandbox-snapshot",
        tool_name: "delete_snapshot",
        description: "Delete a snapshot in Veeva Vault.",
        action: "deleting the snapshot",
        method: Method::DELETE,
        path: "/api/{version}/objects/sandbox/snapshot/{api_name}",
        accept: MediaType::Json,
        body: BodyEncoding::None,
        response: ResponseKind::Confirmation("Snapshot deleted successfully."),
        params: &[Param::path(
            "api_name",
            "The Vault ID of the sandbox snapshot to delete.",
        )],
    },
    Endpoint {
        id: "update-sandbox-snapshot",
        tool_name: "update_sandbox_snapshot",
        description: "Update a sandbox snapshot in Veeva Vault.",
        action: "updating the sandbox snapshot",
        method: Method::POST,
        path: "/api/{version}/objects/sandbox/snapshot/{api_name}/actions/update",
        accept: MediaType::Json,
        body: BodyEncoding::None,
        response: ResponseKind::Json,
        params: &[Param::path("api_name", "The Vault ID of the sandbox.")],
    },
    Endpoint {
        id: "upgrade-sandbox-snapshot",
        tool_name: "upgrade_sandbox_snapshot",
        description: "Upgrade a sandbox snapshot in Veeva Vault.",
        action: "upgrading the sandbox snapshot",
        method: Method::POST,
        path: "/api/{version}/objects/sandbox/snapshot/{api_name}/actions/upgrade",
        accept: MediaType::Json,
        body: BodyEncoding::None,
        response: ResponseKind::Json,
        params: &[Param::path(
            "api_name",
            "The Vault ID of the sandbox to upgrade.",
        )],
    },
    Endpoint {
        id: "build-production-vault",
        tool_name: "build_production_vault",
        description: "Build a production vault in Veeva Vault.",
        action: "building the production vault",
        method: Method::POST,
        path: "/api/{version}/objects/sandbox/actions/buildproduction",
        accept: MediaType::Json,
        body: BodyEncoding::Form,
        response: ResponseKind::Json,
        params: &[Param::body(
            "source",
            "The name of the source vault to build.",
        )],
    },
    Endpoint {
        id: "promote-to-production",
        tool_name: "promote_to_production",
        description: "Promote a pre-production vault to a production vault in Veeva Vault.",
        action: "promoting the vault",
        method: Method::POST,
        path: "/api/{version}/objects/sandbox/actions/promoteproduction",
        accept: MediaType::Json,
        body: BodyEncoding::Form,
        response: ResponseKind::Json,
        params: &[Param::body(
            "name",
            "The name of the pre-production vault to promote.",
        )],
    },
    // Spark messaging queues
    Endpoint {
        id: "retrieve-all-queues",
        tool_name: "retrieve_all_queues",
        description: "Retrieve all queues from Veeva Vault.",
        action: "retrieving queues",
        method: Method::GET,
        path: "/api/{version}/services/queues",
        accept: MediaType::Json,
        body: BodyEncoding::None,
        response: ResponseKind::Json,
        params: &[],
    },
    Endpoint {
        id: "retrieve-queue-status",
        tool_name: "retrieve_queue_status",
        description: "Retrieve the status of a specific queue from Veeva Vault API.",
        action: "retrieving queue status",
        method: Method::GET,
        path: "/api/{version}/services/queues/{queue_name}",
        accept: MediaType::Json,
        body: BodyEncoding::None,
        response: ResponseKind::Json,
        params: &[Param::path(
            "queue_name",
            "The name of the specific queue to retrieve status for.",
        )],
    },
    Endpoint {
        id: "disable-delivery",
        tool_name: "disable_delivery",
        description: "Disable delivery of messages in a specified queue on Veeva Vault.",
        action: "disabling delivery",
        method: Method::PUT,
        path: "/api/{version}/services/queues/{queue_name}/actions/disable_delivery",
        accept: MediaType::Json,
        body: BodyEncoding::None,
        response: ResponseKind::Json,
        params: &[Param::path("queue_name", "The name of the specific queue.")],
    },
    Endpoint {
        id: "enable-delivery",
        tool_name: "enable_delivery",
        description: "Enable delivery of messages in a specified queue on Veeva Vault.",
        action: "enabling delivery",
        method: Method::PUT,
        path: "/api/{version}/services/queues/{queue_name}/actions/enable_delivery",
        accept: MediaType::Json,
        body: BodyEncoding::None,
        response: ResponseKind::Json,
        params: &[Param::path("queue_name", "The name of the specific queue.")],
    },
    Endpoint {
        id: "reset-queue",
        tool_name: "reset_queue",
        description: "Reset a specific queue in Veeva Vault.",
        action: "resetting the queue",
        method: Method::PUT,
        path: "/api/{version}/services/queues/{queue_name}/actions/reset",
        accept: MediaType::Json,
        body: BodyEncoding::None,
        response: ResponseKind::Json,
        params: &[Param::path(
            "queue_name",
            "The name of the specific queue to reset.",
        )],
    },
    // Debug logs
    Endpoint {
        id: "retrieve-all-debug-logs",
        tool_name: "retrieve_all_debug_logs",
        description: "Retrieve all debug logs from Veeva Vault.",
        action: "retrieving debug logs",
        method: Method::GET,
        path: "/api/{version}/logs/code/debug",
        accept: MediaType::Json,
        body: BodyEncoding::None,
        response: ResponseKind::Json,
        params: &[
            Param::query(
                "user_id",
                "Filter results to retrieve the debug log for this user ID only.",
            ),
            Param::query(
                "include_inactive",
                "Set to `true` to include inactive debug log sessions in the response.",
            )
            .of_kind(ParamKind::Boolean)
            .default_value("false"),
        ],
    },
    Endpoint {
        id: "retrieve-single-debug-log",
        tool_name: "retrieve_single_debug_log",
        description: "Retrieve details about a single debug log from Veeva Vault.",
        action: "retrieving the debug log",
        method: Method::GET,
        path: "/api/{version}/logs/code/debug/{id}",
        accept: MediaType::Json,
        body: BodyEncoding::None,
        response: ResponseKind::Json,
        params: &[Param::path("id", "The ID of the debug log to retrieve.")],
    },
    Endpoint {
        id: "download-debug-log-files",
        tool_name: "download_debug_log_files",
        description: "Download debug log files from Veeva Vault.",
        action: "downloading debug log files",
        method: Method::GET,
        path: "/api/{version}/logs/code/debug/{id}/files",
        accept: MediaType::Json,
        body: BodyEncoding::None,
        response: ResponseKind::Binary,
        params: &[Param::path("id", "The ID of the debug log to download.")],
    },
    Endpoint {
        id: "create-debug-log",
        tool_name: "create_debug_log",
        description: "Create a new debug log session for a user in Veeva Vault.",
        action: "creating the debug log",
        method: Method::POST,
        path: "/api/{version}/logs/code/debug",
        accept: MediaType::Json,
        body: BodyEncoding::Multipart,
        response: ResponseKind::Json,
        params: &[
            Param::body(
                "name",
                "The UI-friendly name for the debug log (max 128 characters).",
            ),
            Param::body(
                "user_id",
                "The ID of the user who will trigger entries into this debug log.",
            ),
            Param::body(
                "log_level",
                "The level of error messages to capture in this log.",
            )
            .default_value("all__sys")
            .one_of(LOG_LEVELS),
            Param::body(
                "class_filters",
                "Class filters to restrict log entries to specific classes.",
            )
            .optional(),
        ],
    },
    Endpoint {
        id: "reset-debug-log",
        tool_name: "reset_debug_log",
        description: "Reset the debug log in Veeva Vault.",
        action: "resetting the debug log",
        method: Method::POST,
        path: "/api/{version}/logs/code/debug/{id}/actions/reset",
        accept: MediaType::Json,
        body: BodyEncoding::None,
        response: ResponseKind::Json,
        params: &[Param::path("id", "The ID of the debug log to reset.")],
    },
    Endpoint {
        id: "delete-debug-log",
        tool_name: "delete_debug_log",
        description: "Delete a debug log in Veeva Vault.",
        action: "deleting the debug log",
        method: Method::DELETE,
        path: "/api/{version}/logs/code/debug/{id}",
        accept: MediaType::Json,
        body: BodyEncoding::None,
        response: ResponseKind::Json,
        params: &[Param::path("id", "The ID of the debug log to delete.")],
    },
    // SDK request profiler
    Endpoint {
        id: "retrieve-all-profiling-sessions",
        tool_name: "retrieve_all_profiling_sessions",
        description: "Retrieve all profiling sessions from Veeva Vault.",
        action: "retrieving profiling sessions",
        method: Method::GET,
        path: "/api/{version}/code/profiler",
        accept: MediaType::Json,
        body: BodyEncoding::None,
        response: ResponseKind::Json,
        params: &[],
    },
    Endpoint {
        id: "retrieve-profiling-session",
        tool_name: "retrieve_profiling_session",
        description: "Retrieve details about a specific SDK request profiling session.",
        action: "retrieving the profiling session",
        method: Method::GET,
        path: "/api/{version}/code/profiler/{session_name}",
        accept: MediaType::Json,
        body: BodyEncoding::None,
        response: ResponseKind::Json,
        params: &[Param::path(
            "session_name",
            "The name of the session to retrieve details for.",
        )],
    },
    Endpoint {
        id: "create-profiling-session",
        tool_name: "create_profiling_session",
        description: "Create a new SDK request profiling session in Veeva Vault.",
        action: "creating the profiling session",
        method: Method::POST,
        path: "/api/{version}/code/profiler",
        accept: MediaType::Json,
        body: BodyEncoding::Form,
        response: ResponseKind::Json,
        params: &[
            Param::body("label", "The UI label for this request."),
            Param::body(
                "user_id",
                "The user ID of the user to associate with this session.",
            )
            .optional(),
            Param::body(
                "description",
                "An Admin-facing description of the session.",
            )
            .optional(),
        ],
    },
    Endpoint {
        id: "end-profiling-session",
        tool_name: "end_profiling_session",
        description: "End a profiling session in Veeva Vault.",
        action: "ending the profiling session",
        method: Method::POST,
        path: "/api/{version}/code/profiler/{session_name}/actions/end",
        accept: MediaType::Json,
        body: BodyEncoding::None,
        response: ResponseKind::Json,
        params: &[Param::path(
            "session_name",
            "The name of the session to end.",
        )],
    },
    Endpoint {
        id: "delete-profiling-session",
        tool_name: "delete_profiling_session",
        description: "Delete an inactive profiling session in Veeva Vault.",
        action: "deleting the profiling session",
        method: Method::DELETE,
        path: "/api/{version}/code/profiler/{session_name}",
        accept: MediaType::Json,
        body: BodyEncoding::None,
        response: ResponseKind::Json,
        params: &[Param::path(
            "session_name",
            "The name of the session to delete.",
        )],
    },
    Endpoint {
        id: "download-profiling-session-results",
        tool_name: "download_profiling_session_results",
        description: "Download the Profiler Log for a specific profiling session.",
        action: "downloading profiling session results",
        method: Method::GET,
        path: "/api/{version}/code/profiler/{session_name}/results",
        accept: MediaType::Json,
        body: BodyEncoding::None,
        response: ResponseKind::Binary,
        params: &[Param::path(
            "session_name",
            "The name of the session, for example, baseline__c.",
        )],
    },
    // SCIM
    Endpoint {
        id: "retrieve-scim-provider",
        tool_name: "retrieve_scim_provider",
        description: "Retrieve SCIM Provider information from Veeva Vault.",
        action: "retrieving SCIM Provider information",
        method: Method::GET,
        path: "/api/{version}/scim/v2/ServiceProviderConfig",
        accept: MediaType::Scim,
        body: BodyEncoding::None,
        response: ResponseKind::Json,
        params: &[],
    },
    Endpoint {
        id: "retrieve-all-scim-schema-information",
        tool_name: "retrieve_scim_schemas",
        description: "Retrieve information about all SCIM schema specifications supported by a Vault SCIM service provider.",
        action: "retrieving SCIM schema information",
        method: Method::GET,
        path: "/api/{version}/scim/v2/Schemas",
        accept: MediaType::Scim,
        body: BodyEncoding::None,
        response: ResponseKind::Json,
        params: &[],
    },
    Endpoint {
        id: "retrieve-single-scim-schema-information",
        tool_name: "retrieve_scim_schema",
        description: "Retrieve information about a single SCIM schema specification supported by a Vault SCIM service provider.",
        action: "retrieving SCIM schema information",
        method: Method::GET,
        path: "/api/{version}/scim/v2/Schemas/{id}",
        accept: MediaType::Scim,
        body: BodyEncoding::None,
        response: ResponseKind::Json,
        params: &[Param::path("id", "The ID of the specific schema to retrieve.")],
    },
    Endpoint {
        id: "retrieve-all-scim-resource-types",
        tool_name: "retrieve_scim_resource_types",
        description: "Retrieve all SCIM resource types from Veeva Vault API.",
        action: "retrieving SCIM resource types",
        method: Method::GET,
        path: "/api/{version}/scim/v2/ResourceTypes",
        accept: MediaType::Scim,
        body: BodyEncoding::None,
        response: ResponseKind::Json,
        params: &[],
    },
    Endpoint {
        id: "retrieve-single-scim-resource-type",
        tool_name: "retrieve_scim_resource_type",
        description: "Retrieve a single SCIM resource type from Veeva Vault.",
        action: "retrieving the SCIM resource type",
        method: Method::GET,
        path: "/api/{version}/scim/v2/ResourceTypes/{type}",
        accept: MediaType::Scim,
        body: BodyEncoding::None,
        response: ResponseKind::Json,
        params: &[Param::path("type", "The specific resource type to retrieve.")],
    },
    Endpoint {
        id: "retrieve-all-users-with-scim",
        tool_name: "retrieve_all_users",
        description: "Retrieve all users with SCIM from Veeva Vault.",
        action: "retrieving users",
        method: Method::GET,
        path: "/api/{version}/scim/v2/Users",
        accept: MediaType::Scim,
        body: BodyEncoding::None,
        response: ResponseKind::Json,
        params: &[
            Param::query("filter", "Filter for a specific attribute value."),
            Param::query("attributes", "Include specified attributes only."),
            Param::query(
                "excludedAttributes",
                "Exclude specific attributes from the response.",
            ),
            Param::query(
                "sortBy",
                "Specify an attribute to order the response.",
            ),
            Param::query(
                "sortOrder",
                "Specify the order in which the sortBy parameter is applied.",
            )
            .one_of(ASCENDING_DESCENDING),
            Param::query(
                "count",
                "Specify the number of query results per page.",
            )
            .of_kind(ParamKind::Integer),
            Param::query("startIndex", "Specify the index of the first result.")
                .of_kind(ParamKind::Integer),
        ],
    },
    Endpoint {
        id: "retrieve-single-user-with-scim",
        tool_name: "retrieve_single_user",
        description: "Retrieve a specific user with SCIM from Veeva Vault.",
        action: "retrieving the user",
        method: Method::GET,
        path: "/api/{version}/scim/v2/Users/{id}",
        accept: MediaType::Scim,
        body: BodyEncoding::None,
        response: ResponseKind::Json,
        params: &[
            Param::path("id", "The ID of the user to retrieve."),
            Param::query("filter", "Filter for a specific attribute value."),
            Param::query("attributes", "Include specified attributes only."),
            Param::query(
                "excludedAttributes",
                "Exclude specific attributes from the response.",
            ),
        ],
    },
    Endpoint {
        id: "retrieve-current-user-with-scim",
        tool_name: "retrieve_current_user",
        description: "Retrieve the currently authenticated user with SCIM from Veeva Vault.",
        action: "retrieving the current user",
        method: Method::GET,
        path: "/api/{version}/scim/v2/Me",
        accept: MediaType::Scim,
        body: BodyEncoding::None,
        response: ResponseKind::Json,
        params: &[
            Param::query("attributes", "Include specified attributes only."),
            Param::query(
                "excludedAttributes",
                "Exclude specific attributes from the response.",
            ),
        ],
    },
    Endpoint {
        id: "create-user-with-scim",
        tool_name: "create_user_scim",
        description: "Create a user with SCIM in Veeva Vault.",
        action: "creating the user",
        method: Method::POST,
        path: "/api/{version}/scim/v2/Users",
        accept: MediaType::Scim,
        body: BodyEncoding::Json(JsonBody::ScimCreateUser),
        response: ResponseKind::Json,
        params: &[Param::body("user", "The user details to create.")
            .of_kind(ParamKind::Object)
            .with_schema(inline_schema::<NewUser>)],
    },
    Endpoint {
        id: "update-user-with-scim",
        tool_name: "update_user",
        description: "Update a user in Veeva Vault using SCIM.",
        action: "updating the user",
        method: Method::PUT,
        path: "/api/{version}/scim/v2/Users/{id}",
        accept: MediaType::Scim,
        body: BodyEncoding::Json(JsonBody::Verbatim),
        response: ResponseKind::Json,
        params: &[
            Param::path("id", "The ID of the user to update."),
            Param::body("userData", "The user data to update.")
                .of_kind(ParamKind::Object),
        ],
    },
    Endpoint {
        id: "update-current-user-with-scim",
        tool_name: "update_current_user",
        description: "Update the currently authenticated user with SCIM.",
        action: "updating the user",
        method: Method::PUT,
        path: "/api/{version}/scim/v2/Me",
        accept: MediaType::Scim,
        body: BodyEncoding::Json(JsonBody::ScimUpdateName),
        response: ResponseKind::Json,
        params: &[Param::body("userData", "The user data to update.")
            .of_kind(ParamKind::Object)
            .with_schema(inline_schema::<Name>)],
    },
];

/// Look an endpoint up by its id or by its tool name.
pub fn find_endpoint(name: &str) -> Option<&'static Endpoint> {
    ENDPOINTS
        .iter()
        .find(|endpoint| endpoint.id == name || endpoint.tool_name == name)
}

#[cfg(test)]
mod test {
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn test_catalog_size() {
        assert_eq!(ENDPOINTS.len(), 60);
    }

    #[test]
    fn test_ids_and_tool_names_are_unique() {
        let ids: BTreeSet<_> = ENDPOINTS.iter().map(|e| e.id).collect();
        assert_eq!(ids.len(), ENDPOINTS.len());

        let tools: BTreeSet<_> =
            ENDPOINTS.iter().map(|e| e.tool_name).collect();
        assert_eq!(tools.len(), ENDPOINTS.len());

        // Tool names must not shadow another endpoint's id
        for endpoint in ENDPOINTS {
            assert!(!endpoint.id.contains('_'), "{}", endpoint.id);
            assert!(!endpoint.tool_name.contains('-'), "{}", endpoint.tool_name);
        }
    }

    #[test]
    fn test_placeholders_match_path_params() {
        for endpoint in ENDPOINTS {
            let placeholders: BTreeSet<_> = endpoint
                .placeholders()
                .filter(|name| *name != "version")
                .collect();

            let path_params: BTreeSet<_> = endpoint
                .params_at(Location::Path)
                .map(|param| param.name)
                .collect();

            assert_eq!(placeholders, path_params, "{}", endpoint.id);

            // Path params are always required
            assert!(
                endpoint.params_at(Location::Path).all(|p| p.required),
                "{}",
                endpoint.id
            );
        }
    }

    #[test]
    fn test_param_names_are_unique() {
        for endpoint in ENDPOINTS {
            let mut names = BTreeSet::new();
            for param in endpoint.params {
                assert!(
                    names.insert(param.name),
                    "{} repeats {}",
                    endpoint.id,
                    param.name
                );
            }
        }
    }

    #[test]
    fn test_body_params_match_encoding() {
        for endpoint in ENDPOINTS {
            let body_params = endpoint.params_at(Location::Body).count();

            match endpoint.body {
                BodyEncoding::None => {
                    assert_eq!(body_params, 0, "{}", endpoint.id)
                }

                BodyEncoding::Json(_) | BodyEncoding::Text => {
                    assert_eq!(body_params, 1, "{}", endpoint.id)
                }

                BodyEncoding::Form | BodyEncoding::Multipart => {
                    assert!(body_params > 0, "{}", endpoint.id)
                }
            }
        }
    }

    #[test]
    fn test_defaults_are_allowed_values() {
        for endpoint in ENDPOINTS {
            for param in endpoint.params {
                if let (Some(default), false) =
                    (param.default, param.allowed.is_empty())
                {
                    assert!(param.allowed.contains(&default));
                }
            }
        }
    }

    #[test]
    fn test_find_endpoint() {
        let by_id = find_endpoint("retrieve-picklist-values").unwrap();
        let by_tool = find_endpoint("retrieve_picklist_values").unwrap();
        assert!(std::ptr::eq(by_id, by_tool));

        assert!(find_endpoint("retrieve-everything").is_none());
    }
}
