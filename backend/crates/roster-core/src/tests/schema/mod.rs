mod table_schema;
